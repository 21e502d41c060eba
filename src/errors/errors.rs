use std::io;

use thiserror::Error;

/// Behavior class of a [`CompileError`].
///
/// The class, not the concrete variant, decides how the code generator
/// reacts: `UnsupportedFeature` statements are skipped with a diagnostic
/// while the pass keeps going, everything else halts the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The document itself is unusable (unreadable, unparseable, wrong shape).
    Input,
    /// A recognized construct the backend does not implement.
    UnsupportedFeature,
    /// A variable was referenced before any declaration bound it.
    MissingSymbol,
    /// An expression violates the operand/operator alternation.
    MalformedExpression,
    /// The IR backend or the output sink failed.
    Backend,
}

/// Main error type for the markup-to-IR pipeline.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("failed to read {path}: {source}")]
    UnreadableInput { path: String, source: io::Error },

    #[error("document not parsed successfully: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    #[error("document has no <body> to compile")]
    EmptyDocument,

    #[error("expected <html> root element, found <{found}>")]
    RootTagMismatch { found: String },

    #[error("unexpected top-level element <{found}>")]
    UnexpectedTopLevelTag { found: String },

    #[error("unsupported type {type_name:?} in declaration of {name:?}")]
    UnsupportedType { type_name: String, name: String },

    #[error("unsupported operator {symbol:?}")]
    UnsupportedOperator { symbol: String },

    #[error("invalid {type_name} literal {value:?} in declaration of {name:?}")]
    InvalidLiteral {
        type_name: String,
        name: String,
        value: String,
    },

    #[error("variable {name:?} referenced before declaration")]
    MissingSymbol { name: String },

    #[error("malformed expression: {reason}")]
    MalformedExpression { reason: String },

    #[error("IR builder failure: {0}")]
    Builder(#[from] inkwell::builder::BuilderError),

    #[error("failed to write module: {message}")]
    ModuleWrite { message: String },
}

impl CompileError {
    /// Construct a malformed-expression error from a human-readable reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        CompileError::MalformedExpression {
            reason: reason.into(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            CompileError::UnreadableInput { .. }
            | CompileError::MalformedDocument(_)
            | CompileError::EmptyDocument
            | CompileError::RootTagMismatch { .. }
            | CompileError::UnexpectedTopLevelTag { .. } => ErrorClass::Input,
            CompileError::UnsupportedType { .. }
            | CompileError::UnsupportedOperator { .. }
            | CompileError::InvalidLiteral { .. } => ErrorClass::UnsupportedFeature,
            CompileError::MissingSymbol { .. } => ErrorClass::MissingSymbol,
            CompileError::MalformedExpression { .. } => ErrorClass::MalformedExpression,
            CompileError::Builder(_) | CompileError::ModuleWrite { .. } => ErrorClass::Backend,
        }
    }

    /// Whether this error aborts the compilation pass.
    ///
    /// Unsupported-feature errors degrade the statement that raised them;
    /// every other class stops the pass at the first occurrence.
    pub fn is_fatal(&self) -> bool {
        self.class() != ErrorClass::UnsupportedFeature
    }
}

/// Result type alias for pipeline operations.
pub type CompileResult<T> = Result<T, CompileError>;
