/// The instruction sent to the model for one expression.
pub fn build_prompt(expression: &str) -> String {
    format!(
        r#"Parse and analyze this mathematical expression: {expression}

Provide a structured JSON response with:
1. The parsed expression in a standardized format
2. The derivative of the expression
3. Any integrals in the expression (computed if possible)
4. Domain and range information
5. Critical points (maxima, minima, inflection points)

Format the response as valid JSON with these keys:
{{
  "parsed": "string representation",
  "derivative": "string representation",
  "integral": "string representation",
  "domain": [min, max],
  "range": [min, max],
  "criticalPoints": [{{"x": value, "type": "maximum/minimum/inflection"}}]
}}
"#
    )
}
