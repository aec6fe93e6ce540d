use crate::ast::{BinaryOp, Expr};
use crate::parser::AstParser;
use crate::pest_parser::Rule;
use pest::iterators::Pair;

impl AstParser {
    pub(super) fn build_unary(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        let mut negate = false;
        let mut operand = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::sign => {
                    if inner.as_str() == "-" {
                        negate = !negate;
                    }
                }
                Rule::power => operand = Some(self.build_power(inner)?),
                other => return Err(format!("Unexpected rule in unary: {:?}", other)),
            }
        }

        let operand = operand.ok_or("Unary operator without operand")?;
        Ok(if negate { Expr::neg(operand) } else { operand })
    }

    pub(super) fn build_power(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        let mut inner = pair.into_inner();
        let base_pair = inner.next().ok_or("Empty power expression")?;
        let base = self.build_primary(base_pair)?;

        match inner.next() {
            // Exponent is a full unary, which recurses into power: right associative
            Some(exponent) => {
                let exponent = self.build_unary(exponent)?;
                Ok(Expr::binary(BinaryOp::Pow, base, exponent))
            }
            None => Ok(base),
        }
    }

    fn build_primary(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        match pair.as_rule() {
            Rule::number => {
                let num = pair
                    .as_str()
                    .parse::<f64>()
                    .map_err(|e| format!("Failed to parse number: {}", e))?;
                Ok(Expr::Number(num))
            }
            Rule::identifier => Ok(Expr::Variable(pair.as_str().to_string())),
            Rule::call => self.build_call(pair),
            Rule::sum => self.build_sum(pair),
            other => Err(format!("Unexpected primary rule: {:?}", other)),
        }
    }

    fn build_call(&mut self, pair: Pair<Rule>) -> Result<Expr, String> {
        let mut inner = pair.into_inner();
        let name = inner.next().ok_or("Call without function name")?.as_str().to_string();

        let args = inner
            .map(|arg| self.build_sum(arg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expr::Call { name, args })
    }
}
