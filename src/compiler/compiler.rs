//! Main code generation module.
//!
//! This module contains the core Compiler structure that drives lowering
//! from the AST to LLVM IR. It manages the LLVM context handle, module
//! creation, the implicit entry function, and module finalization.

use std::path::Path;

use inkwell::{
    builder::Builder,
    context::Context,
    module::{Linkage, Module},
    values::FunctionValue,
};

use crate::ast::ast::Ast;
use crate::errors::errors::{CompileError, CompileResult};

use super::emit::emit;
use super::symbols::SymbolTable;

/// The compilation context threaded through every emission call.
///
/// Owns the LLVM module being built, the IR builder (and with it the
/// current insertion point), and the symbol table. One value per
/// compilation; nothing is shared between passes.
///
/// # Type Parameters
///
/// * `'ctx` - Lifetime of the LLVM context
pub struct Compiler<'ctx> {
    /// Reference to the LLVM context
    pub context: &'ctx Context,
    /// The LLVM module being built
    pub module: Module<'ctx>,
    /// The LLVM IR builder; its position is the insertion point
    pub builder: Builder<'ctx>,
    /// Map of variable names to their stack slots
    pub symbols: SymbolTable<'ctx>,
}

impl<'ctx> Compiler<'ctx> {
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        Compiler {
            context,
            module: context.create_module(module_name),
            builder: context.create_builder(),
            symbols: SymbolTable::new(),
        }
    }

    /// Opens the implicit entry function and generates code for every
    /// top-level statement, strictly in source order.
    ///
    /// Unsupported-feature errors skip the offending statement with a
    /// diagnostic and generation continues; any other error halts the
    /// pass immediately.
    pub fn compile(&mut self, ast: &Ast) -> CompileResult<()> {
        self.create_entry_function();

        for &statement in ast.statements() {
            log::debug!("emitting `{}`", ast.describe(statement));

            match emit(self, ast, statement) {
                Ok(_) => {}
                Err(error) if error.is_fatal() => return Err(error),
                Err(error) => {
                    log::warn!("skipping `{}`: {error}", ast.describe(statement));
                }
            }
        }

        Ok(())
    }

    /// Creates the single `i32 ()` entry function with its `entry` block
    /// and positions the builder at the start of that block.
    fn create_entry_function(&mut self) -> FunctionValue<'ctx> {
        let function_type = self.context.i32_type().fn_type(&[], false);
        let function = self
            .module
            .add_function("main", function_type, Some(Linkage::External));

        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        function
    }

    /// Serialized textual IR for the module as built so far.
    pub fn ir_to_string(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// Finalizes the module and writes it to `output_file`.
    ///
    /// Consuming `self` means nothing can be emitted once the module has
    /// been handed to the sink.
    pub fn finish(self, output_file: &Path) -> CompileResult<()> {
        self.finalize()?;

        self.module
            .print_to_file(output_file)
            .map_err(|message| CompileError::ModuleWrite {
                message: message.to_string(),
            })
    }

    /// Finalizes the module and returns the serialized IR text instead of
    /// writing a file.
    pub fn finish_to_string(self) -> CompileResult<String> {
        self.finalize()?;

        Ok(self.ir_to_string())
    }

    /// Terminates the entry block if a degraded pass left it open, then
    /// verifies the module. Verification trouble is surfaced as a
    /// diagnostic; the sink still receives the module either way.
    fn finalize(&self) -> CompileResult<()> {
        if let Some(block) = self.builder.get_insert_block() {
            if block.get_terminator().is_none() {
                self.builder
                    .build_return(Some(&self.context.i32_type().const_zero()))?;
            }
        }

        if let Err(message) = self.module.verify() {
            log::warn!(
                "module verification failed: {}",
                message.to_string().trim_end()
            );
        }

        Ok(())
    }
}
