use std::fmt::Display;

use regex::Captures;

use crate::{ENTRY_KEY_GROUP_NAME, ENTRY_VALUE_GROUP_NAME, Error};

/// A single `key = value` line, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'content> {
    pub key: &'content str,
    pub value: &'content str,
}

impl Display for KeyValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

impl<'content> TryFrom<Captures<'content>> for KeyValue<'content> {
    type Error = Error;

    fn try_from(captures: Captures<'content>) -> Result<Self, Self::Error> {
        let key = captures
            .name(ENTRY_KEY_GROUP_NAME)
            .ok_or(Error::RegexCaptureGroupNotFound(ENTRY_KEY_GROUP_NAME))?
            .as_str()
            .trim();

        let value = captures
            .name(ENTRY_VALUE_GROUP_NAME)
            .ok_or(Error::RegexCaptureGroupNotFound(ENTRY_VALUE_GROUP_NAME))?
            .as_str()
            .trim();

        Ok(Self { key, value })
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::KeyValue;

    #[test]
    fn captures_are_trimmed() {
        let regex = Regex::new(r"^(?P<key>[^=]+)=(?P<value>.*)$").unwrap();
        let captures = regex.captures("entry_file   =   main.js ").unwrap();

        let key_value = KeyValue::try_from(captures).unwrap();

        assert_eq!(key_value.key, "entry_file");
        assert_eq!(key_value.value, "main.js");
        assert_eq!(key_value.to_string(), "entry_file = main.js");
    }

    #[test]
    fn missing_group_is_reported() {
        let regex = Regex::new(r"^(?P<other>[^=]+)=(?P<value>.*)$").unwrap();
        let captures = regex.captures("a=b").unwrap();

        assert!(matches!(
            KeyValue::try_from(captures),
            Err(crate::Error::RegexCaptureGroupNotFound("key"))
        ));
    }
}
