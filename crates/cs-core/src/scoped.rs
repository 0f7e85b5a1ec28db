//! Public/private pair carried through every stage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Scope;

/// One list per [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Scoped<T> {
    #[serde(default)]
    pub public: Vec<T>,
    #[serde(default)]
    pub private: Vec<T>,
}

impl<T> Default for Scoped<T> {
    fn default() -> Self {
        Self {
            public: Vec::new(),
            private: Vec::new(),
        }
    }
}

impl<T> Scoped<T> {
    #[must_use]
    pub const fn new(public: Vec<T>, private: Vec<T>) -> Self {
        Self { public, private }
    }

    #[must_use]
    pub fn get(&self, scope: Scope) -> &[T] {
        match scope {
            Scope::Public => &self.public,
            Scope::Private => &self.private,
        }
    }

    pub fn get_mut(&mut self, scope: Scope) -> &mut Vec<T> {
        match scope {
            Scope::Public => &mut self.public,
            Scope::Private => &mut self.private,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.public.len() + self.private.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.private.is_empty()
    }

    /// Iterate public entries first, then private ones.
    pub fn iter(&self) -> impl Iterator<Item = (Scope, &T)> {
        self.public
            .iter()
            .map(|item| (Scope::Public, item))
            .chain(self.private.iter().map(|item| (Scope::Private, item)))
    }

    /// Concatenate both lists, public first.
    #[must_use]
    pub fn into_merged(self) -> Vec<T> {
        let mut merged = self.public;
        merged.extend(self.private);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_keeps_public_first() {
        let scoped = Scoped::new(vec![1, 2], vec![3]);
        assert_eq!(scoped.len(), 3);
        assert_eq!(scoped.into_merged(), vec![1, 2, 3]);
    }

    #[test]
    fn iter_tags_each_item_with_its_scope() {
        let scoped = Scoped::new(vec!["a"], vec!["b"]);
        let tagged: Vec<_> = scoped.iter().collect();
        assert_eq!(tagged, vec![(Scope::Public, &"a"), (Scope::Private, &"b")]);
    }

    #[test]
    fn missing_lists_deserialize_as_empty() {
        let scoped: Scoped<String> = serde_json::from_str(r#"{"public":["x"]}"#).unwrap();
        assert_eq!(scoped.public, vec!["x".to_string()]);
        assert!(scoped.private.is_empty());
    }
}
