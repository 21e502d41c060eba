use std::{env, fs::read_to_string, path::Path, process::ExitCode};

use htmlc::{
    builder::builder::Builder,
    compiler::compiler::Compiler,
    errors::errors::{CompileError, CompileResult},
};
use inkwell::context::Context;

/// Fixed output location for the serialized module.
const OUTPUT_FILE: &str = "out.ll";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        print_usage(args.first().map(String::as_str).unwrap_or("htmlc"));
        return ExitCode::SUCCESS;
    }

    match run(&args[1]) {
        Ok(()) => {
            println!("Wrote {OUTPUT_FILE}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(file_path: &str) -> CompileResult<()> {
    let source = read_to_string(file_path).map_err(|source| CompileError::UnreadableInput {
        path: file_path.to_string(),
        source,
    })?;

    let document = roxmltree::Document::parse(&source)?;
    let ast = Builder::new().build_document(&document)?;

    let context = Context::create();
    let mut compiler = Compiler::new(&context, module_name(file_path));
    compiler.compile(&ast)?;

    compiler.finish(Path::new(OUTPUT_FILE))
}

/// The module is named after the input file, without its directory part.
fn module_name(file_path: &str) -> &str {
    Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path)
}

fn print_usage(program: &str) {
    println!("Usage: {program} <filename>");
    println!("Compiles the markup program in <filename> to {OUTPUT_FILE}");
}
