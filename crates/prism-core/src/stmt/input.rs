use super::Value;
use crate::Name;

use std::collections::HashMap;

/// Supplies values for field references during evaluation.
pub trait Input {
    fn resolve_field(&mut self, name: &Name) -> Option<Value> {
        let _ = name;
        None
    }
}

/// Input for expressions that reference no fields.
#[derive(Debug, Default)]
pub struct ConstInput {}

impl ConstInput {
    pub fn new() -> ConstInput {
        ConstInput {}
    }
}

impl Input for ConstInput {}

/// Fields are looked up by their full dotted name first, then by their
/// unqualified name.
impl Input for HashMap<String, Value> {
    fn resolve_field(&mut self, name: &Name) -> Option<Value> {
        self.get(&name.to_string())
            .or_else(|| name.last().and_then(|last| self.get(last)))
            .cloned()
    }
}

impl<const N: usize> Input for [(&str, Value); N] {
    fn resolve_field(&mut self, name: &Name) -> Option<Value> {
        let full = name.to_string();
        self.iter()
            .find(|(key, _)| *key == full)
            .or_else(|| self.iter().find(|(key, _)| Some(*key) == name.last()))
            .map(|(_, value)| value.clone())
    }
}

impl<T: Input + ?Sized> Input for &mut T {
    fn resolve_field(&mut self, name: &Name) -> Option<Value> {
        (**self).resolve_field(name)
    }
}
