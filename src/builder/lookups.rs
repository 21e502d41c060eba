use std::collections::HashMap;

use crate::ast::ast::NodeId;

use super::builder::{
    build_declaration, build_operator, build_return_statement, build_variable_reference, Builder,
};

/// Handler for a tag in statement context (direct child of `<body>`).
/// Returns the built node, or `None` when the element had to be skipped.
pub type StmtHandler = fn(&mut Builder, roxmltree::Node) -> Option<NodeId>;
/// Handler for a tag in nested expression context (inside `<return>`).
pub type ExprHandler = fn(&mut Builder, roxmltree::Node) -> Option<NodeId>;

// Lookup tables inside the builder struct, keyed by tag name
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type ExprLookup = HashMap<&'static str, ExprHandler>;

pub fn create_tag_lookups(builder: &mut Builder) {
    // Statements
    builder.stmt("declare", build_declaration);
    builder.stmt("return", build_return_statement);

    // Expression tags, only recognized inside a return statement
    builder.expr("variable", build_variable_reference);
    builder.expr("operator", build_operator);
}
