//! Editable form state container
//!
//! Generic keyed state for edit screens. The key set is fixed when the
//! container is built; values can be replaced one at a time or as a
//! complete snapshot. The container does no validation of its own.

use std::collections::BTreeMap;

use thiserror::Error;

/// Form field error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Field was not part of the initializing key set
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Snapshot key set differs from the container's key set
    #[error("Snapshot key set does not match the form's fields")]
    KeySetMismatch,
}

/// Keyed form state with a fixed field set
///
/// Every successful mutation bumps `version`, so a consumer can observe
/// changes without the container knowing who renders it.
#[derive(Debug, Clone)]
pub struct FormState<V> {
    fields: BTreeMap<String, V>,
    version: u64,
}

impl<V: Clone> FormState<V> {
    /// Build a container from the initial field → value mapping
    pub fn new<K: Into<String>>(initial: impl IntoIterator<Item = (K, V)>) -> Self {
        let fields = initial
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<BTreeMap<_, _>>();
        Self { fields, version: 0 }
    }

    /// Current value for `field`
    pub fn current(&self, field: &str) -> Result<&V, FormError> {
        self.fields
            .get(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))
    }

    /// Replace the value at `field`, leaving every other field untouched
    pub fn set(&mut self, value: V, field: &str) -> Result<(), FormError> {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value;
                self.version += 1;
                Ok(())
            }
            None => Err(FormError::UnknownField(field.to_string())),
        }
    }

    /// Atomically replace the full mapping
    ///
    /// The snapshot must carry exactly the key set fixed at
    /// construction; otherwise nothing changes and an error is
    /// returned.
    pub fn replace_all(&mut self, snapshot: BTreeMap<String, V>) -> Result<(), FormError> {
        if snapshot.len() != self.fields.len()
            || !snapshot.keys().eq(self.fields.keys())
        {
            return Err(FormError::KeySetMismatch);
        }
        self.fields = snapshot;
        self.version += 1;
        Ok(())
    }

    /// Field names, in stable order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Copy of the full mapping
    pub fn snapshot(&self) -> BTreeMap<String, V> {
        self.fields.clone()
    }

    /// Mutation counter, bumped on every `set`/`replace_all`
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormState<String> {
        FormState::new([
            ("id", String::new()),
            ("name", "Latte".to_string()),
            ("categoryId", String::new()),
        ])
    }

    #[test]
    fn test_set_only_touches_target_field() {
        let mut form = sample();
        let before = form.snapshot();

        form.set("c1".to_string(), "categoryId").unwrap();

        assert_eq!(form.current("categoryId").unwrap(), "c1");
        assert_eq!(form.current("name").unwrap(), &before["name"]);
        assert_eq!(form.current("id").unwrap(), &before["id"]);
        assert_eq!(form.version(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = sample();
        assert_eq!(
            form.set("x".to_string(), "price"),
            Err(FormError::UnknownField("price".to_string()))
        );
        assert!(form.current("price").is_err());
        // Failed mutations are not observable
        assert_eq!(form.version(), 0);
    }

    #[test]
    fn test_replace_all_keeps_key_set() {
        let mut form = sample();
        let keys_before: Vec<_> = form.keys().map(str::to_string).collect();

        let mut snapshot = form.snapshot();
        snapshot.insert("id".to_string(), "p9".to_string());
        snapshot.insert("categoryId".to_string(), "c2".to_string());
        form.replace_all(snapshot).unwrap();

        let keys_after: Vec<_> = form.keys().map(str::to_string).collect();
        assert_eq!(keys_before, keys_after);
        assert_eq!(form.current("id").unwrap(), "p9");
    }

    #[test]
    fn test_replace_all_rejects_foreign_key_set() {
        let mut form = sample();

        let mut extra = form.snapshot();
        extra.insert("price".to_string(), "9.50".to_string());
        assert_eq!(form.replace_all(extra), Err(FormError::KeySetMismatch));

        let mut missing = form.snapshot();
        missing.remove("name");
        assert_eq!(form.replace_all(missing), Err(FormError::KeySetMismatch));

        // Container untouched by the rejected snapshots
        assert_eq!(form.current("name").unwrap(), "Latte");
        assert_eq!(form.version(), 0);
    }
}
