/// Builder module
/// Converts the parsed markup document into the AST via tag dispatch
///
/// Submodules:
/// - builder: the document walk and per-tag construction functions
/// - lookups: the statement and expression dispatch tables
pub mod builder;
pub mod lookups;
