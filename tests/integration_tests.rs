//! Integration tests for end-to-end compilation.
//!
//! These tests drive whole documents through parsing, AST construction,
//! and LLVM IR generation, and assert on the serialized module text and
//! on the error classification of bad inputs.

use htmlc::compile_document;
use htmlc::errors::errors::{CompileError, ErrorClass};

#[test]
fn test_return_declared_constant() {
    let source = r#"
        <html>
            <head><title>program</title></head>
            <body>
                <declare type="int" name="x" value="5"/>
                <return><variable target="x"/></return>
            </body>
        </html>"#;
    let ir = compile_document(source, "test.html").unwrap();

    assert!(ir.contains("define i32 @main()"));
    assert!(ir.contains("store i32 5"));
    assert!(ir.contains("load i32"));
    assert!(ir.contains("ret i32 %"));
}

#[test]
fn test_addition_of_two_variables() {
    let source = r#"
        <html><body>
            <declare type="int" name="a" value="2"/>
            <declare type="int" name="b" value="3"/>
            <return>
                <variable target="a"/>
                <operator type="+"/>
                <variable target="b"/>
            </return>
        </body></html>"#;
    let ir = compile_document(source, "test.html").unwrap();

    assert!(ir.contains("store i32 2"));
    assert!(ir.contains("store i32 3"));
    assert_eq!(ir.matches("add i32").count(), 1);
    assert!(ir.contains("ret i32 %ret"));
}

#[test]
fn test_chained_addition_folds_left_to_right() {
    let source = r#"
        <html><body>
            <declare type="int" name="a" value="1"/>
            <declare type="int" name="b" value="2"/>
            <declare type="int" name="c" value="3"/>
            <return>
                <variable target="a"/>
                <operator type="+"/>
                <variable target="b"/>
                <operator type="+"/>
                <variable target="c"/>
            </return>
        </body></html>"#;
    let ir = compile_document(source, "test.html").unwrap();

    // Two adds, the second consuming the first accumulator.
    assert_eq!(ir.matches("add i32").count(), 2);
    assert!(ir.contains("add i32 %ret"));
}

#[test]
fn test_unsupported_type_degrades_but_compiles() {
    let source = r#"
        <html><body>
            <declare type="string" name="s" value="hello"/>
            <declare type="int" name="x" value="9"/>
            <return><variable target="x"/></return>
        </body></html>"#;
    let ir = compile_document(source, "test.html").unwrap();

    assert!(ir.contains("store i32 9"));
    assert!(ir.contains("ret i32 %"));
}

#[test]
fn test_undeclared_variable_is_missing_symbol() {
    let source = r#"<html><body><return><variable target="y"/></return></body></html>"#;
    let result = compile_document(source, "test.html");

    match result {
        Err(error) => {
            assert_eq!(error.class(), ErrorClass::MissingSymbol);
            assert!(error.is_fatal());
        }
        Ok(_) => panic!("expected a missing-symbol failure"),
    }
}

#[test]
fn test_adjacent_operands_are_malformed() {
    let source = r#"
        <html><body>
            <declare type="int" name="a" value="1"/>
            <declare type="int" name="b" value="2"/>
            <return>
                <variable target="a"/>
                <variable target="b"/>
            </return>
        </body></html>"#;
    let result = compile_document(source, "test.html");

    assert!(matches!(
        result,
        Err(CompileError::MalformedExpression { .. })
    ));
}

#[test]
fn test_compilation_is_deterministic() {
    let source = r#"
        <html><body>
            <declare type="int" name="a" value="2"/>
            <declare type="int" name="b" value="3"/>
            <return>
                <variable target="a"/>
                <operator type="+"/>
                <variable target="b"/>
            </return>
        </body></html>"#;

    let first = compile_document(source, "test.html").unwrap();
    let second = compile_document(source, "test.html").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_redeclaration_resolves_to_second_slot() {
    let source = r#"
        <html><body>
            <declare type="int" name="x" value="1"/>
            <declare type="int" name="x" value="2"/>
            <return><variable target="x"/></return>
        </body></html>"#;
    let ir = compile_document(source, "test.html").unwrap();

    assert!(ir.contains("store i32 1"));
    assert!(ir.contains("store i32 2"));
    // LLVM uniquifies the second alloca as %x1; the load must read it.
    assert!(ir.contains("load i32, i32* %x1"));
}

#[test]
fn test_unparseable_document_is_input_error() {
    let result = compile_document("<html><body>", "test.html");

    match result {
        Err(error) => assert_eq!(error.class(), ErrorClass::Input),
        Ok(_) => panic!("expected a parse failure"),
    }
}

#[test]
fn test_empty_source_is_input_error() {
    let result = compile_document("", "test.html");

    assert!(matches!(result, Err(error) if error.class() == ErrorClass::Input));
}

#[test]
fn test_wrong_root_is_input_error() {
    let result = compile_document("<program><body/></program>", "test.html");

    assert!(matches!(result, Err(CompileError::RootTagMismatch { .. })));
}

#[test]
fn test_wrong_top_level_tag_is_input_error() {
    let result = compile_document("<html><main/></html>", "test.html");

    assert!(matches!(
        result,
        Err(CompileError::UnexpectedTopLevelTag { .. })
    ));
}

#[test]
fn test_module_is_named_after_input() {
    let source = r#"<html><body/></html>"#;
    let ir = compile_document(source, "program.html").unwrap();

    assert!(ir.contains("ModuleID = 'program.html'"));
}

#[test]
fn test_degraded_pass_still_terminates_function() {
    let source = r#"
        <html><body>
            <declare type="bool" name="flag" value="true"/>
        </body></html>"#;
    let ir = compile_document(source, "test.html").unwrap();

    assert!(ir.contains("ret i32 0"));
}
