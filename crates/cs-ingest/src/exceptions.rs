//! Substring deny list applied to DNS names before reconciliation.

use std::path::Path;

use serde::Serialize;

use crate::{IngestError, read_text};

/// Normalised exception substrings: trimmed, lowercase, non-empty, sorted, unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExceptionList {
    entries: Vec<String>,
}

impl ExceptionList {
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        list.extend(items);
        list
    }

    /// Add more exceptions, keeping the list normalised.
    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.extend(
            items
                .into_iter()
                .map(|item| item.as_ref().trim().to_lowercase())
                .filter(|item| !item.is_empty()),
        );
        self.entries.sort();
        self.entries.dedup();
    }

    /// Parse a JSON array of strings.
    ///
    /// # Errors
    ///
    /// [`IngestError::Exceptions`] when the document is not an array of strings.
    pub fn from_json(text: &str) -> Result<Self, IngestError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Array(items) = value else {
            return Err(IngestError::Exceptions(
                "expected a JSON array of strings".into(),
            ));
        };

        let strings = items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| {
                    IngestError::Exceptions(format!("expected a string, found {item}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(strings))
    }

    /// Read a JSON exception file.
    ///
    /// # Errors
    ///
    /// I/O failures and the errors of [`ExceptionList::from_json`].
    pub fn load_json(path: &Path) -> Result<Self, IngestError> {
        Self::from_json(&read_text(path)?)
    }

    /// Whether `name` survives filtering.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.matching(name).is_none()
    }

    /// The first exception contained in `name`, if any.
    #[must_use]
    pub fn matching(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|exception| name.contains(exception.as_str()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
