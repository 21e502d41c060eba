//! Markup-to-AST builder.
//!
//! Walks the parsed document tree and produces the AST via tag dispatch.
//! The builder performs no semantic validation: declared-before-use and
//! type/operator checking are deferred entirely to code generation.

use roxmltree::Document;

use crate::ast::ast::{Ast, NodeId, NodeKind};
use crate::errors::errors::{CompileError, CompileResult};

use super::lookups::{create_tag_lookups, ExprHandler, ExprLookup, StmtHandler, StmtLookup};

/// Converts a parsed markup document into an [`Ast`].
///
/// Holds the node arena being filled plus the two dispatch tables: one
/// for statement context (children of `<body>`) and one for nested
/// expression context (children of `<return>`).
pub struct Builder {
    ast: Ast,
    stmt_lookup: StmtLookup,
    expr_lookup: ExprLookup,
}

impl Builder {
    pub fn new() -> Self {
        let mut builder = Builder {
            ast: Ast::new(),
            stmt_lookup: StmtLookup::new(),
            expr_lookup: ExprLookup::new(),
        };

        create_tag_lookups(&mut builder);

        builder
    }

    /// Registers a handler for a tag in statement context.
    pub fn stmt(&mut self, tag: &'static str, handler: StmtHandler) {
        self.stmt_lookup.insert(tag, handler);
    }

    /// Registers a handler for a tag in nested expression context.
    pub fn expr(&mut self, tag: &'static str, handler: ExprHandler) {
        self.expr_lookup.insert(tag, handler);
    }

    /// Consumes the builder and produces the AST for a whole document.
    ///
    /// The root element must be `html`. A `head` element is ignored; the
    /// `body` element supplies the top-level statement sequence in
    /// document order. Any other element at the top level is a fatal
    /// input error, as is a document without a `body`.
    pub fn build_document(mut self, document: &Document) -> CompileResult<Ast> {
        let root = document.root_element();
        if root.tag_name().name() != "html" {
            return Err(CompileError::RootTagMismatch {
                found: root.tag_name().name().to_string(),
            });
        }

        let mut body = None;
        for child in root.children() {
            if !child.is_element() {
                continue;
            }

            match child.tag_name().name() {
                "head" => {}
                "body" => body = Some(child),
                found => {
                    return Err(CompileError::UnexpectedTopLevelTag {
                        found: found.to_string(),
                    })
                }
            }
        }

        let body = body.ok_or(CompileError::EmptyDocument)?;
        for child in body.children() {
            if !child.is_element() {
                continue;
            }

            let tag = child.tag_name().name();
            match self.stmt_lookup.get(tag).copied() {
                Some(handler) => {
                    if let Some(id) = handler(&mut self, child) {
                        self.ast.push_statement(id);
                    }
                }
                None => log::warn!("skipping unrecognized statement tag <{tag}>"),
            }
        }

        log::debug!(
            "built {} nodes, {} top-level statements",
            self.ast.len(),
            self.ast.statements().len()
        );

        Ok(self.ast)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

pub fn build_declaration(builder: &mut Builder, element: roxmltree::Node) -> Option<NodeId> {
    let type_name = require_attribute(element, "type")?;
    let name = require_attribute(element, "name")?;
    let value = require_attribute(element, "value")?;

    Some(builder.ast.alloc(NodeKind::Declaration {
        type_name,
        name,
        value,
    }))
}

pub fn build_return_statement(builder: &mut Builder, element: roxmltree::Node) -> Option<NodeId> {
    let id = builder.ast.alloc(NodeKind::ReturnStatement);

    let mut children = Vec::new();
    for child in element.children() {
        if !child.is_element() {
            continue;
        }

        let tag = child.tag_name().name();
        match builder.expr_lookup.get(tag).copied() {
            Some(handler) => {
                if let Some(child_id) = handler(builder, child) {
                    children.push(child_id);
                }
            }
            None => log::warn!("skipping unrecognized expression tag <{tag}> inside <return>"),
        }
    }

    builder.ast.add_children(id, children);

    Some(id)
}

pub fn build_variable_reference(builder: &mut Builder, element: roxmltree::Node) -> Option<NodeId> {
    let name = require_attribute(element, "target")?;

    Some(builder.ast.alloc(NodeKind::VariableReference { name }))
}

pub fn build_operator(builder: &mut Builder, element: roxmltree::Node) -> Option<NodeId> {
    let symbol = require_attribute(element, "type")?;

    Some(builder.ast.alloc(NodeKind::Operator { symbol }))
}

/// Fetches a required attribute; an element missing one cannot be built
/// and is skipped with a non-fatal diagnostic.
fn require_attribute(element: roxmltree::Node, attribute: &str) -> Option<String> {
    match element.attribute(attribute) {
        Some(value) => Some(value.to_string()),
        None => {
            log::warn!(
                "skipping <{}> missing required attribute {attribute:?}",
                element.tag_name().name()
            );
            None
        }
    }
}
