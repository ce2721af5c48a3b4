use std::{collections::BTreeMap, fmt::Display};

use crate::{ENTRY_FILE_KEY, models::KeyValue};

/// One bundle, as described by a single `[name]` section.
///
/// `entry_file` is kept exactly as written; use [`crate::resolve_entry_file`] to turn it into a path
/// relative to the ini file's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDescriptor {
    pub(crate) name: String,
    pub(crate) entry_file: Option<String>,
    pub(crate) extra: BTreeMap<String, String>,
}

impl BundleDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_file(&self) -> Option<&str> {
        self.entry_file.as_deref()
    }

    /// Every key of the section other than `entry_file`.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        if key == ENTRY_FILE_KEY {
            return self.entry_file();
        }
        self.extra.get(key).map(String::as_str)
    }
}

impl Display for BundleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        if let Some(entry_file) = &self.entry_file {
            writeln!(f, "{}", KeyValue { key: ENTRY_FILE_KEY, value: entry_file })?;
        }
        for (key, value) in self.extra.iter() {
            writeln!(f, "{}", KeyValue { key, value })?;
        }
        Ok(())
    }
}

/// Renders descriptors back into ini text, one section per descriptor, separated by blank lines.
pub fn render(bundles: &[BundleDescriptor]) -> String {
    bundles.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
