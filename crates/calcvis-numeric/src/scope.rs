//! Variable bindings for evaluation.

use std::collections::HashMap;
use std::f64::consts;

/// Named constants visible in every scope. Bindings shadow them.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(consts::PI),
        "e" | "E" => Some(consts::E),
        "tau" => Some(consts::TAU),
        "phi" => Some(1.618_033_988_749_895),
        "inf" | "Infinity" => Some(f64::INFINITY),
        "nan" | "NaN" => Some(f64::NAN),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scope {
    vars: HashMap<String, f64>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope with only `x` bound.
    pub fn with_x(x: f64) -> Self {
        let mut scope = Self::new();
        scope.set("x", x);
        scope
    }

    pub fn set(&mut self, name: &str, value: f64) {
        match self.vars.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.vars.insert(name.to_string(), value);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied().or_else(|| constant(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_resolve() {
        let scope = Scope::new();
        assert_eq!(scope.get("pi"), Some(consts::PI));
        assert_eq!(scope.get("E"), Some(consts::E));
        assert!(scope.get("nan").unwrap().is_nan());
        assert_eq!(scope.get("y"), None);
    }

    #[test]
    fn test_binding_shadows_constant() {
        let mut scope = Scope::with_x(2.0);
        scope.set("e", 1.0);
        assert_eq!(scope.get("e"), Some(1.0));
        assert_eq!(scope.get("x"), Some(2.0));

        scope.set("x", 3.0);
        assert_eq!(scope.get("x"), Some(3.0));
    }
}
