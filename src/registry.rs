//! Name keyed table of declared prototypes.
//!
//! Externs and the prototypes of definitions are recorded here so later calls
//! and re-declarations can be resolved by name without parsing them again.
//! The registry owns its own copies, independent of any `Function`.

use std::collections::HashMap;

use crate::ast::declarations::Prototype;

#[derive(Debug, Default, Clone)]
pub struct PrototypeRegistry {
    protos: HashMap<String, Prototype>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        PrototypeRegistry::default()
    }

    /// Records `proto` under its name. A re-declaration replaces the previous
    /// entry, which is returned.
    pub fn register(&mut self, proto: Prototype) -> Option<Prototype> {
        self.protos.insert(proto.name.clone(), proto)
    }

    pub fn get(&self, name: &str) -> Option<&Prototype> {
        self.protos.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.protos.contains_key(name)
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.get(name).map(Prototype::arity)
    }

    pub fn len(&self) -> usize {
        self.protos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protos.is_empty()
    }

    /// Declared names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.protos.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::PrototypeRegistry;
    use crate::ast::declarations::Prototype;

    fn proto(name: &str, params: &[&str]) -> Prototype {
        Prototype::new(name, params.iter().map(|param| param.to_string()).collect())
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PrototypeRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.register(proto("sin", &["x"])).is_none());
        assert!(registry.register(proto("add", &["a", "b"])).is_none());

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("sin"));
        assert!(!registry.contains("cos"));
        assert_eq!(registry.arity("add"), Some(2));
        assert_eq!(registry.arity("cos"), None);
        assert_eq!(registry.get("sin"), Some(&proto("sin", &["x"])));
        assert_eq!(registry.names(), vec!["add", "sin"]);
    }

    #[test]
    fn test_redeclaration_replaces() {
        let mut registry = PrototypeRegistry::new();
        registry.register(proto("f", &["x"]));

        let previous = registry.register(proto("f", &["x", "y"]));

        assert_eq!(previous, Some(proto("f", &["x"])));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.arity("f"), Some(2));
    }
}
