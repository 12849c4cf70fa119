//! Crate error type

use crate::core::tokenizer::ParseError;

/// Errors surfaced by the cursor layer.
///
/// Only lexical failures are errors. Structural problems such as unbalanced
/// tags or duplicate attributes are absorbed by the traversal heuristics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tokenizer could not split the input into XML tokens
    #[error("malformed XML: {message} at byte {position}")]
    MalformedXml { message: String, position: usize },
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::MalformedXml {
            message: err.message,
            position: err.position,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parse_error() {
        let err: Error = ParseError::new("Unterminated comment", 12).into();
        assert_eq!(
            err,
            Error::MalformedXml {
                message: "Unterminated comment".to_string(),
                position: 12
            }
        );
        assert_eq!(err.to_string(), "malformed XML: Unterminated comment at byte 12");
    }
}
