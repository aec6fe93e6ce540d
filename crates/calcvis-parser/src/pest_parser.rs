use crate::ast::Expr;
use crate::error::ParseError;
use crate::parser::AstParser;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct ExpressionParser;

/// Parse expression text into a syntax tree.
///
/// ```
/// use calcvis_parser::{parse, BinaryOp, Expr};
///
/// let expr = parse("2x").unwrap();
/// assert!(matches!(expr, Expr::Binary { op: BinaryOp::Mul, .. }));
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut pairs = ExpressionParser::parse(Rule::expression, source)
        .map_err(|e| ParseError::Syntax(e.to_string()))?;

    let root = pairs
        .next()
        .ok_or_else(|| ParseError::Tree("no expression produced".to_string()))?;

    let mut builder = AstParser::new();
    builder.build_expression(root).map_err(ParseError::Tree)
}
