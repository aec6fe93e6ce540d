pub mod ast;
pub mod error;
pub mod parser;
pub mod pest_parser;

// Re-export commonly used items
pub use ast::{BinaryOp, Expr, UnaryOp};
pub use error::ParseError;
pub use pest_parser::parse;
