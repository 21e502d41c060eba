//! Core AST definitions.
//!
//! Nodes live in a flat arena ([`Ast`]) and refer to each other through
//! [`NodeId`] indices. The arena owns all node storage: child links can
//! never form cycles or share subtrees, and the whole tree is released in
//! one bulk drop when the `Ast` goes out of scope.

/// Index of a node inside the [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// The closed set of node variants the builder can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Binds a name to an initial constant value, e.g. `int x = 5`.
    Declaration {
        type_name: String,
        name: String,
        value: String,
    },
    /// Reads a previously declared binding.
    VariableReference { name: String },
    /// Pure data holder for an operator symbol; carries no computation.
    /// Read only by the enclosing return statement's fold.
    Operator { symbol: String },
    /// Terminates the entry function with the value of its child
    /// expression (operand/operator/operand... in document order).
    ReturnStatement,
}

impl NodeKind {
    /// Tag label used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Declaration { .. } => "declare",
            NodeKind::VariableReference { .. } => "variable",
            NodeKind::Operator { .. } => "operator",
            NodeKind::ReturnStatement => "return",
        }
    }
}

/// One AST node: its variant payload plus ordered child links.
#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    children: Vec<NodeId>,
}

impl Node {
    /// Child nodes in document order. Ordering is load-bearing:
    /// expression evaluation is strictly left-to-right.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of AST nodes plus the ordered top-level statement sequence.
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    statements: Vec<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Ast::default()
    }

    /// Allocates a node with no children and returns its id.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        id
    }

    /// Appends `children` to `parent`'s child list, preserving order.
    pub fn add_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        self.nodes[parent.0 as usize].children.extend(children);
    }

    /// Appends a node to the top-level statement sequence.
    pub fn push_statement(&mut self, id: NodeId) {
        self.statements.push(id);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    /// Top-level statements in document order.
    pub fn statements(&self) -> &[NodeId] {
        &self.statements
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Side-effect-free diagnostic rendering of a subtree, e.g.
    /// `int x = 5` or `return a + b`.
    pub fn describe(&self, id: NodeId) -> String {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Declaration {
                type_name,
                name,
                value,
            } => format!("{type_name} {name} = {value}"),
            NodeKind::VariableReference { name } => name.clone(),
            NodeKind::Operator { symbol } => symbol.clone(),
            NodeKind::ReturnStatement => {
                let mut out = String::from("return");
                for &child in node.children() {
                    out.push(' ');
                    out.push_str(&self.describe(child));
                }
                out
            }
        }
    }
}
