#![allow(clippy::module_inception)]

//! htmlc compiles a markup document whose tags encode a tiny imperative
//! program (integer declarations and an additive return expression) into
//! a textual LLVM IR module.
//!
//! Pipeline: markup text → tagged document tree (`roxmltree`) →
//! [`builder::builder::Builder`] → AST arena → [`compiler::compiler::Compiler`]
//! → LLVM IR (`inkwell`) → serialized module.

use inkwell::context::Context;

use crate::builder::builder::Builder;
use crate::compiler::compiler::Compiler;
use crate::errors::errors::CompileResult;

pub mod ast;
pub mod builder;
pub mod compiler;
pub mod errors;

/// Compiles a markup document held in memory down to textual LLVM IR.
///
/// Convenience wrapper over the full pipeline for tests and embedders;
/// the CLI drives the same steps with a file sink instead.
pub fn compile_document(source: &str, module_name: &str) -> CompileResult<String> {
    let document = roxmltree::Document::parse(source)?;
    let ast = Builder::new().build_document(&document)?;

    let context = Context::create();
    let mut compiler = Compiler::new(&context, module_name);
    compiler.compile(&ast)?;

    compiler.finish_to_string()
}
