use std::collections::BTreeMap;

use crate::{
    ENTRY_FILE_KEY,
    models::{BundleDescriptor, KeyValue},
};

/// Accumulates the keys of one section until it is flushed into a [`BundleDescriptor`].
#[derive(Debug, Default, Clone)]
pub struct BundleDescriptorBuilder {
    name: String,
    entries: BTreeMap<String, String>,
}

impl BundleDescriptorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_entry(self, entry: KeyValue<'_>) -> Self {
        self.add_key_value_pair(entry.key, entry.value)
    }

    /// Sets `key` to `value`, replacing any value set earlier for the same key.
    pub fn add_key_value_pair(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Folds a later section with the same name into this one. Keys from `later` win.
    pub fn merge(mut self, later: Self) -> Self {
        self.entries.extend(later.entries);
        self
    }

    /// Applies `defaults` to every key the section did not set, then splits out `entry_file`.
    pub fn build(self, defaults: &[(&str, &str)]) -> BundleDescriptor {
        let Self { name, mut entries } = self;

        for (key, value) in defaults.iter().rev() {
            entries.entry((*key).to_owned()).or_insert_with(|| (*value).to_owned());
        }

        let entry_file = entries.remove(ENTRY_FILE_KEY);

        BundleDescriptor { name, entry_file, extra: entries }
    }
}

#[cfg(test)]
mod tests {
    use super::BundleDescriptorBuilder;
    use crate::models::KeyValue;

    #[test]
    fn explicit_keys_beat_defaults() {
        let bundle = BundleDescriptorBuilder::new("plugin")
            .add_key_value_pair("entry_file", "main.js")
            .add_key_value_pair("kind", "theme")
            .build(&[("kind", "plugin"), ("entry_file", "index.js"), ("version", "1")]);

        assert_eq!(bundle.entry_file(), Some("main.js"));
        assert_eq!(bundle.get("kind"), Some("theme"));
        assert_eq!(bundle.get("version"), Some("1"));
    }

    #[test]
    fn later_default_wins_over_earlier_default() {
        let bundle = BundleDescriptorBuilder::new("plugin").build(&[("kind", "first"), ("kind", "second")]);

        assert_eq!(bundle.get("kind"), Some("second"));
    }

    #[test]
    fn defaults_can_supply_entry_file() {
        let bundle = BundleDescriptorBuilder::new("plugin").build(&[("entry_file", "index.js")]);

        assert_eq!(bundle.entry_file(), Some("index.js"));
        assert!(bundle.extra().is_empty());
    }

    #[test]
    fn merge_keeps_earlier_keys_and_overrides_shared_ones() {
        let earlier = BundleDescriptorBuilder::new("plugin")
            .add_entry(KeyValue { key: "entry_file", value: "old.js" })
            .add_entry(KeyValue { key: "kind", value: "theme" });
        let later = BundleDescriptorBuilder::new("plugin").add_entry(KeyValue { key: "entry_file", value: "new.js" });

        let bundle = earlier.merge(later).build(&[]);

        assert_eq!(bundle.name(), "plugin");
        assert_eq!(bundle.entry_file(), Some("new.js"));
        assert_eq!(bundle.get("kind"), Some("theme"));
    }
}
