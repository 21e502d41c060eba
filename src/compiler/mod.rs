//! Code generation module for the compiler.
//!
//! This module contains the LLVM-based code generator that transforms
//! the AST into an LLVM IR module. It handles:
//!
//! - The compilation context (module, builder, insertion point)
//! - Per-node instruction emission and the return-expression fold
//! - The name-to-stack-slot symbol table
//! - Module finalization and serialization

pub mod compiler;
pub mod emit;
pub mod symbols;
