use thiserror::Error;

/// Errors produced while turning expression text into an [`Expr`](crate::Expr).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input was empty or whitespace only
    #[error("empty expression")]
    Empty,

    /// The text does not match the grammar
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The grammar matched but the tree had an unexpected shape
    #[error("malformed syntax tree: {0}")]
    Tree(String),
}
