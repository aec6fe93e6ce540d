//! Builds [`Expr`] trees from pest pairs.

mod primary;

use crate::ast::{BinaryOp, Expr};
use crate::pest_parser::Rule;
use pest::iterators::Pair;

#[derive(Debug, Default)]
pub struct AstParser {
    depth: usize,
}

/// Parenthesised input nested deeper than this is rejected instead of
/// recursing until the stack runs out.
const MAX_DEPTH: usize = 256;

impl AstParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_expression(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        match pair.as_rule() {
            Rule::expression => {
                let sum = pair
                    .into_inner()
                    .find(|p| p.as_rule() == Rule::sum)
                    .ok_or("Empty expression")?;
                self.build_sum(sum)
            }
            other => Err(format!("Expected expression, got {:?}", other)),
        }
    }

    pub(crate) fn build_sum(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(format!("Expression nested deeper than {} levels", MAX_DEPTH));
        }

        let mut inner = pair.into_inner();
        let first = inner.next().ok_or("Empty sum")?;
        let mut acc = self.build_product(first)?;

        while let Some(op_pair) = inner.next() {
            let op = match op_pair.as_str() {
                "+" => BinaryOp::Add,
                "-" => BinaryOp::Sub,
                other => return Err(format!("Unknown additive operator: {}", other)),
            };
            let rhs_pair = inner.next().ok_or("Missing right operand")?;
            let rhs = self.build_product(rhs_pair)?;
            acc = Expr::binary(op, acc, rhs);
        }

        self.depth -= 1;
        Ok(acc)
    }

    fn build_product(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        let mut inner = pair.into_inner();
        let first = inner.next().ok_or("Empty product")?;
        let mut acc = self.build_implicit(first)?;

        while let Some(op_pair) = inner.next() {
            let op = match op_pair.as_str() {
                "*" => BinaryOp::Mul,
                "/" => BinaryOp::Div,
                other => return Err(format!("Unknown multiplicative operator: {}", other)),
            };
            let rhs_pair = inner.next().ok_or("Missing right operand")?;
            let rhs = self.build_implicit(rhs_pair)?;
            acc = Expr::binary(op, acc, rhs);
        }

        Ok(acc)
    }

    /// `2x(x+1)` is a chain of unary/power factors folded left with `*`.
    fn build_implicit(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        let mut inner = pair.into_inner();
        let first = inner.next().ok_or("Empty implicit product")?;
        let mut acc = self.build_unary(first)?;

        for factor in inner {
            let rhs = self.build_power(factor)?;
            acc = Expr::binary(BinaryOp::Mul, acc, rhs);
        }

        Ok(acc)
    }
}
