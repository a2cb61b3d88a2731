//! Error types for Sapling evaluation

use std::fmt;

use thiserror::Error;

/// How an [`EvalError`] affects the running interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The interpreter instance must not continue.
    Fatal,

    /// Reported, replaced with `0.0`, and evaluation carries on.
    Recoverable,

    /// Should be unreachable from a well-formed parser; handled like a
    /// recoverable error.
    Internal,
}

/// Conditions the core can detect and report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Every slot of the fixed-size symbol table holds a different name.
    #[error("symbol table overflow ({capacity} slots in use)")]
    SymbolTableOverflow {
        /// Configured table capacity
        capacity: usize,
    },

    /// A call to a symbol that has no function body.
    #[error("call to undefined function {name}")]
    UndefinedFunction {
        /// Name of the called symbol
        name: String,
    },

    /// A call supplied fewer argument expressions than declared parameters.
    #[error("too few arguments in call to {name}: expected {expected}, got {got}")]
    TooFewArguments {
        /// Name of the called function
        name: String,
        /// Declared arity
        expected: usize,
        /// Number of argument expressions supplied
        got: usize,
    },

    /// A built-in call node carries an id outside the built-in table.
    #[error("unknown built-in function {id}")]
    UnknownBuiltin {
        /// The raw id stored in the node
        id: u32,
    },

    /// Evaluation was asked to evaluate an absent tree.
    #[error("internal error: null eval")]
    NullExpression,
}

impl EvalError {
    /// Classify this error.
    pub fn severity(&self) -> Severity {
        match self {
            EvalError::SymbolTableOverflow { .. } => Severity::Fatal,
            EvalError::UndefinedFunction { .. } | EvalError::TooFewArguments { .. } => {
                Severity::Recoverable
            }
            EvalError::UnknownBuiltin { .. } | EvalError::NullExpression => Severity::Internal,
        }
    }

    /// Whether the interpreter must stop after this error.
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

/// A reported error together with the source line the lexer was on.
///
/// Renders as `<line>: error: <message>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Line number supplied by the lexer's line counter
    pub line: u32,

    /// What went wrong
    pub error: EvalError,
}

impl Diagnostic {
    /// Create a diagnostic for `error` at `line`.
    pub fn new(line: u32, error: EvalError) -> Self {
        Self { line, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: error: {}", self.line, self.error)
    }
}

/// Result type alias for operations that can fail fatally
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classification() {
        assert!(EvalError::SymbolTableOverflow { capacity: 3 }.is_fatal());
        assert_eq!(
            EvalError::UndefinedFunction { name: "f".into() }.severity(),
            Severity::Recoverable
        );
        assert_eq!(EvalError::NullExpression.severity(), Severity::Internal);
        assert_eq!(
            EvalError::UnknownBuiltin { id: 9 }.severity(),
            Severity::Internal
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            12,
            EvalError::TooFewArguments {
                name: "avg".into(),
                expected: 2,
                got: 1,
            },
        );
        assert_eq!(
            diag.to_string(),
            "12: error: too few arguments in call to avg: expected 2, got 1"
        );
    }
}
