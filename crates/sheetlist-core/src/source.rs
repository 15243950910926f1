use std::collections::HashMap;
use std::sync::RwLock;

use crate::constants::{keys, DEFAULT_SHEET_NAME};

/// String-keyed configuration store owned by the embedding application.
///
/// Reads are synchronous and expected to be cheap.
pub trait CredentialSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: CredentialSource + ?Sized> CredentialSource for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

#[derive(Default)]
pub struct MemorySource {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.remove(key)
    }
}

impl CredentialSource for MemorySource {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.get(key).cloned()
    }
}

impl CredentialSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Which spreadsheet and sheet the record operations address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressingContext {
    pub spreadsheet_id: String,
    pub sheet_name: String,
}

impl AddressingContext {
    /// Returns `None` when no spreadsheet id is configured. A blank sheet name
    /// falls back to `Sheet1`.
    pub fn resolve(source: &dyn CredentialSource) -> Option<Self> {
        let spreadsheet_id = source
            .get(keys::SPREADSHEET_ID)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())?;
        let sheet_name = source
            .get(keys::SHEET_NAME)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string());
        Some(Self {
            spreadsheet_id,
            sheet_name,
        })
    }

    /// `Sheet!A{start}:D{end}`, or the open `Sheet!A:D` when no rows are given.
    pub fn range(&self, rows: Option<(usize, usize)>) -> String {
        match rows {
            Some((start, end)) => format!("{}!A{start}:D{end}", self.sheet_name),
            None => format!("{}!A:D", self.sheet_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_sheet_name() {
        let source = MemorySource::new().with(keys::SPREADSHEET_ID, " sheet-123 ");
        let ctx = AddressingContext::resolve(&source).expect("resolved");
        assert_eq!(ctx.spreadsheet_id, "sheet-123");
        assert_eq!(ctx.sheet_name, "Sheet1");

        source.set(keys::SHEET_NAME, "Groceries");
        let ctx = AddressingContext::resolve(&source).expect("resolved");
        assert_eq!(ctx.sheet_name, "Groceries");
    }

    #[test]
    fn resolve_requires_spreadsheet_id() {
        let source = MemorySource::new().with(keys::SHEET_NAME, "Groceries");
        assert!(AddressingContext::resolve(&source).is_none());
        source.set(keys::SPREADSHEET_ID, "   ");
        assert!(AddressingContext::resolve(&source).is_none());
    }

    #[test]
    fn ranges() {
        let ctx = AddressingContext {
            spreadsheet_id: "id".to_string(),
            sheet_name: "Sheet1".to_string(),
        };
        assert_eq!(ctx.range(None), "Sheet1!A:D");
        assert_eq!(ctx.range(Some((4, 4))), "Sheet1!A4:D4");
        assert_eq!(ctx.range(Some((2, 3))), "Sheet1!A2:D3");
    }

    #[test]
    fn memory_source_remove() {
        let source = MemorySource::new().with("k", "v");
        assert_eq!(source.get("k").as_deref(), Some("v"));
        assert_eq!(source.remove("k").as_deref(), Some("v"));
        assert!(source.get("k").is_none());
    }
}
