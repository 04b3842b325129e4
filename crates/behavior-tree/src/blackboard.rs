//! Key/value variable bindings shared by the nodes of one graph.
//!
//! The owner of a graph writes variables (chosen target, destination, ...)
//! before ticking, and leaves read them back by name.

use std::collections::HashMap;

/// String-keyed variable storage.
#[derive(Debug, Clone)]
pub struct Blackboard<V> {
    vars: HashMap<&'static str, V>,
}

impl<V> Blackboard<V> {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Binds `key` to `value`, returning the previous binding if any.
    pub fn set(&mut self, key: &'static str, value: V) -> Option<V> {
        self.vars.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.vars.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.vars.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<V> Default for Blackboard<V> {
    fn default() -> Self {
        Self::new()
    }
}
