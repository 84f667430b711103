//! Error types for hmsubst.

use crate::lexer::Span;
use thiserror::Error;

/// Result type for hmsubst operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced while turning text into types or substitutions.
///
/// Spans are byte offsets into the text the caller passed in, whitespace
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unclosed '('")]
    UnclosedParen { span: Span },

    #[error("Unmatched ')'")]
    UnmatchedCloseParen { span: Span },

    #[error("Unbalanced braces around substitution")]
    UnbalancedBraces { span: Span },

    #[error("Expected a type, found nothing")]
    EmptyType { span: Span },

    #[error("Missing operand for '{arrow}'")]
    MissingOperand { arrow: String, span: Span },

    #[error("Scheme binder must be a single type variable name")]
    InvalidBinder { span: Span },

    #[error("Unexpected '{found}'")]
    UnexpectedToken { found: String, span: Span },

    #[error("Malformed substitution entry '{entry}', expected 'name: Type'")]
    MalformedEntry { entry: String, span: Span },

    #[error("Expected '{{substitution}} type'")]
    MalformedInput { span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnclosedParen { span }
            | ParseError::UnmatchedCloseParen { span }
            | ParseError::UnbalancedBraces { span }
            | ParseError::EmptyType { span }
            | ParseError::MissingOperand { span, .. }
            | ParseError::InvalidBinder { span }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::MalformedEntry { span, .. }
            | ParseError::MalformedInput { span } => *span,
        }
    }

    /// Extra guidance shown under the diagnostic, if any.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::UnclosedParen { .. } => Some("add a matching ')'"),
            ParseError::InvalidBinder { .. } => {
                Some("each segment before '=>' must be one name, as in 'a => b => T'")
            }
            ParseError::UnexpectedToken { .. } => {
                Some("adjacent types must be joined by '->' or '=>'")
            }
            ParseError::MalformedInput { .. } => Some("for example: {a: Int} a -> Bool"),
            _ => None,
        }
    }
}
