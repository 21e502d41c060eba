/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the node arena, node ids, and the closed node variant set
pub mod ast;
