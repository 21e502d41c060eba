//! Per-node IR emission.
//!
//! One exhaustive match over the closed node variant set, plus the
//! left-to-right fold that evaluates return expressions.

use inkwell::values::{BasicValueEnum, InstructionValue, IntValue};

use crate::ast::ast::{Ast, NodeId, NodeKind};
use crate::errors::errors::{CompileError, CompileResult};

use super::compiler::Compiler;

/// The name of the one declaration type the backend implements.
pub const INT_TYPE: &str = "int";

/// The one operator symbol the return fold implements.
pub const ADD_OPERATOR: &str = "+";

/// What emitting a node produced: an IR value usable as an operand, an
/// instruction with no usable value, or nothing at all.
pub enum Emitted<'ctx> {
    Value(BasicValueEnum<'ctx>),
    Instruction(InstructionValue<'ctx>),
}

/// Emits IR for one AST node at the compiler's current insertion point.
///
/// Declarations and returns yield their instruction, variable references
/// yield the loaded value, operators yield nothing (they are read only by
/// the enclosing return fold).
pub fn emit<'ctx>(
    compiler: &mut Compiler<'ctx>,
    ast: &Ast,
    id: NodeId,
) -> CompileResult<Option<Emitted<'ctx>>> {
    match &ast.node(id).kind {
        NodeKind::Declaration {
            type_name,
            name,
            value,
        } => {
            if type_name != INT_TYPE {
                return Err(CompileError::UnsupportedType {
                    type_name: type_name.clone(),
                    name: name.clone(),
                });
            }

            let literal: i32 = value.parse().map_err(|_| CompileError::InvalidLiteral {
                type_name: type_name.clone(),
                name: name.clone(),
                value: value.clone(),
            })?;

            let int_type = compiler.context.i32_type();
            let slot = compiler.builder.build_alloca(int_type, name)?;
            let constant = int_type.const_int(literal as u64, true);
            let store = compiler.builder.build_store(slot, constant)?;

            compiler.symbols.insert(name.clone(), slot);
            log::trace!("declared {name} = {literal}");

            Ok(Some(Emitted::Instruction(store)))
        }
        NodeKind::VariableReference { name } => {
            let slot = compiler
                .symbols
                .lookup(name)
                .ok_or_else(|| CompileError::MissingSymbol { name: name.clone() })?;

            let value = compiler.builder.build_load(slot, name)?;

            Ok(Some(Emitted::Value(value)))
        }
        NodeKind::Operator { .. } => Ok(None),
        NodeKind::ReturnStatement => {
            let value = fold_expression(compiler, ast, id)?;
            let ret = compiler.builder.build_return(Some(&value))?;

            Ok(Some(Emitted::Instruction(ret)))
        }
    }
}

/// Evaluates a return statement's children as a left-to-right fold.
///
/// The first operand seeds the accumulator; after that a strict
/// operator/operand alternation is required, and each pair combines the
/// accumulator with the operand. The operator symbol is checked before
/// the operand it pairs with is evaluated, so an unsupported pair emits
/// no load.
fn fold_expression<'ctx>(
    compiler: &mut Compiler<'ctx>,
    ast: &Ast,
    id: NodeId,
) -> CompileResult<IntValue<'ctx>> {
    let mut accumulator: Option<IntValue<'ctx>> = None;
    let mut pending_operator: Option<&str> = None;

    for &child in ast.node(id).children() {
        match &ast.node(child).kind {
            NodeKind::Operator { symbol } => {
                if accumulator.is_none() {
                    return Err(CompileError::malformed(format!(
                        "operator {symbol:?} before any operand"
                    )));
                }
                if pending_operator.is_some() {
                    return Err(CompileError::malformed(format!(
                        "operator {symbol:?} follows another operator"
                    )));
                }
                if symbol != ADD_OPERATOR {
                    return Err(CompileError::UnsupportedOperator {
                        symbol: symbol.clone(),
                    });
                }

                pending_operator = Some(symbol);
            }
            _ => {
                if accumulator.is_some() && pending_operator.is_none() {
                    return Err(CompileError::malformed(format!(
                        "operand `{}` without a preceding operator",
                        ast.describe(child)
                    )));
                }

                let operand = emit_operand(compiler, ast, child)?;
                accumulator = match accumulator {
                    None => Some(operand),
                    // The pending symbol was validated when it was seen;
                    // only addition reaches this point.
                    Some(acc) => {
                        pending_operator = None;
                        Some(compiler.builder.build_int_add(acc, operand, "ret")?)
                    }
                };
            }
        }
    }

    if pending_operator.is_some() {
        return Err(CompileError::malformed(
            "expression ends with a dangling operator",
        ));
    }

    accumulator.ok_or_else(|| CompileError::malformed("return statement with no value"))
}

fn emit_operand<'ctx>(
    compiler: &mut Compiler<'ctx>,
    ast: &Ast,
    id: NodeId,
) -> CompileResult<IntValue<'ctx>> {
    match emit(compiler, ast, id)? {
        Some(Emitted::Value(value)) => Ok(value.into_int_value()),
        _ => Err(CompileError::malformed(format!(
            "`{}` produces no value inside a return expression",
            ast.describe(id)
        ))),
    }
}
