//! Translated string lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Translations {
    strings: HashMap<String, String>,
}

impl Translations {
    #[cfg(test)]
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }

    /// Translation for `key`, or `default` when the key is unknown
    pub fn t(&self, key: &str, default: &str) -> String {
        match self.strings.get(key) {
            Some(value) => value.clone(),
            None => default.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }
}
