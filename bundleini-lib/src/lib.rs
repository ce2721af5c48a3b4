mod builders;
mod error;
pub mod models;
mod options;
mod resolve;

use std::{fs, path::Path};

use regex::Regex;

pub use crate::builders::BundleDescriptorBuilder;
pub use crate::error::{Error, ParseError};
use crate::models::KeyValue;
pub use crate::models::{BundleDescriptor, render};
pub use crate::options::ParseOptions;
pub use crate::resolve::{base_dir, resolve_entry_file};

pub const ENTRY_KEY_GROUP_NAME: &str = "key";
pub const ENTRY_VALUE_GROUP_NAME: &str = "value";
pub const SECTION_NAME_GROUP_NAME: &str = "section_name";

/// Key naming the file a bundle is launched from.
pub const ENTRY_FILE_KEY: &str = "entry_file";

/// Reads the ini file at `path` and returns one descriptor per section, in source order.
///
/// Malformed lines are skipped. See [`parse_bundle_ini_with`] to reject them instead.
pub fn parse_bundle_ini(path: impl AsRef<Path>, defaults: &[(&str, &str)]) -> Result<Vec<BundleDescriptor>, Error> {
    parse_bundle_ini_with(path, defaults, ParseOptions::default())
}

pub fn parse_bundle_ini_with(
    path: impl AsRef<Path>,
    defaults: &[(&str, &str)],
    options: ParseOptions,
) -> Result<Vec<BundleDescriptor>, Error> {
    let path = path.as_ref();

    log::debug!("Reading bundle ini file {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

    parse(&contents, defaults, options)
}

/// Parses bundle ini text.
///
/// `defaults` fill in every key a section leaves unset; when a key appears twice in `defaults` the later pair
/// wins. Sections sharing a name are merged into the first one, later keys overriding earlier ones.
///
/// A default must survive being written back out as a `key = value` line, so keys that are empty, padded,
/// contain `=` or a line break, or start with `[`, `;` or `#` are rejected, as are padded or multi-line values.
pub fn parse(ini_string: &str, defaults: &[(&str, &str)], options: ParseOptions) -> Result<Vec<BundleDescriptor>, Error> {
    for &(key, value) in defaults {
        check_default(key, value)?;
    }

    let ini_string = ini_string.strip_prefix('\u{FEFF}').unwrap_or(ini_string);

    let section_header_regex = Regex::new(&format!(r"^\[(?P<{SECTION_NAME_GROUP_NAME}>.+)\]$"))?;
    let key_value_regex = Regex::new(&format!(r"^(?P<{ENTRY_KEY_GROUP_NAME}>[^=]+)=(?P<{ENTRY_VALUE_GROUP_NAME}>.*)$"))?;

    let mut sections = Vec::<BundleDescriptorBuilder>::new();
    let mut current_section_builder = None::<BundleDescriptorBuilder>;

    for (index, line) in ini_string.lines().map(str::trim).enumerate() {
        let line_number = index + 1;

        log::debug!("Parsing line {line_number}: {line}");

        if line.is_empty() || line.starts_with([';', '#']) {
            continue;
        }

        if let Some(section_header_captures) = section_header_regex.captures(line) {
            log::debug!("Line matched section start regex");

            if let Some(builder) = current_section_builder.take() {
                flush_section(&mut sections, builder);
            }

            let section_name = section_header_captures
                .name(SECTION_NAME_GROUP_NAME)
                .ok_or(Error::RegexCaptureGroupNotFound(SECTION_NAME_GROUP_NAME))?
                .as_str()
                .trim();

            if section_name.is_empty() {
                // Entries below a nameless header belong to no section.
                skip_or_reject(options, ParseError::EmptySectionName { line: line_number, text: line.to_owned() })?;
            } else {
                current_section_builder = Some(BundleDescriptorBuilder::new(section_name));
            }

            continue;
        }

        if let Some(key_value_captures) = key_value_regex.captures(line) {
            log::debug!("Line matched key-value regex.");

            let entry = KeyValue::try_from(key_value_captures)?;

            match current_section_builder.take() {
                Some(builder) => current_section_builder = Some(builder.add_entry(entry)),
                None => skip_or_reject(options, ParseError::EntryOutsideSection {
                    line: line_number,
                    text: line.to_owned(),
                })?,
            }

            continue;
        }

        skip_or_reject(options, ParseError::MalformedLine { line: line_number, text: line.to_owned() })?;
    }

    log::debug!("End of file reached. Adding current section, if we are building one.");

    if let Some(builder) = current_section_builder {
        flush_section(&mut sections, builder);
    }

    log::debug!("Building {} bundle descriptors", sections.len());

    Ok(sections.into_iter().map(|builder| builder.build(defaults)).collect())
}

fn check_default(key: &str, value: &str) -> Result<(), Error> {
    let bad_key = key.is_empty()
        || key != key.trim()
        || key.contains(['=', '\n', '\r'])
        || key.starts_with(['[', ';', '#']);
    let bad_value = value != value.trim() || value.contains(['\n', '\r']);

    if bad_key || bad_value {
        return Err(Error::InvalidDefault { key: key.to_owned(), value: value.to_owned() });
    }

    Ok(())
}

fn flush_section(sections: &mut Vec<BundleDescriptorBuilder>, builder: BundleDescriptorBuilder) {
    log::debug!("Adding section {builder:?}");

    match sections.iter_mut().find(|section| section.name() == builder.name()) {
        Some(existing) => {
            log::debug!("Merging duplicate section [{}]", builder.name());
            *existing = std::mem::take(existing).merge(builder);
        }
        None => sections.push(builder),
    }
}

fn skip_or_reject(options: ParseOptions, error: ParseError) -> Result<(), ParseError> {
    if options.strict {
        return Err(error);
    }

    log::warn!("Skipping {error}");

    Ok(())
}
