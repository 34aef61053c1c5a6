//! Generation Features
//!
//! Boolean switches of the Go backend that influence which imports a file needs.
//! Options are written as `name` or `name=true|false`.

use crate::error::ConfigError;
use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
    /// Feature switches consulted once when a file's imports are initialized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Features: u32 {
        /// Generate `database/sql` Scan/Value methods for enums.
        const SCAN_VALUE_FOR_ENUM = 0b00001;
        /// Emit type definitions only, without serialization code.
        const DEFINITION_ONLY = 0b00010;
        /// Preserve unknown fields when decoding.
        const KEEP_UNKNOWN_FIELDS = 0b00100;
        /// Generate DeepEqual methods.
        const GEN_DEEP_EQUAL = 0b01000;
        /// Generate reflection based validation for set fields.
        const VALIDATE_SET = 0b10000;
    }
}

const OPTION_NAMES: &[(&str, Features)] = &[
    ("scan_value_for_enum", Features::SCAN_VALUE_FOR_ENUM),
    ("definition_only", Features::DEFINITION_ONLY),
    ("keep_unknown_fields", Features::KEEP_UNKNOWN_FIELDS),
    ("gen_deep_equal", Features::GEN_DEEP_EQUAL),
    ("validate_set", Features::VALIDATE_SET),
];

impl Features {
    pub fn from_option_name(name: &str) -> Option<Features> {
        OPTION_NAMES
            .iter()
            .find(|(option, _)| *option == name)
            .map(|(_, flag)| *flag)
    }

    /// Applies a single `name[=bool]` option.
    pub fn apply_option(&mut self, option: &str) -> Result<(), ConfigError> {
        let (name, value) = match option.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (option.trim(), None),
        };
        let flag = Features::from_option_name(name)
            .ok_or_else(|| ConfigError::UnknownOption(name.to_string()))?;
        let enabled = parse_bool(name, value)?;
        self.set(flag, enabled);
        Ok(())
    }

    pub fn from_options<'a, I>(options: I) -> Result<Features, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut features = Features::empty();
        for option in options {
            features.apply_option(option)?;
        }
        Ok(features)
    }
}

pub(crate) fn parse_bool(option: &str, value: Option<&str>) -> Result<bool, ConfigError> {
    match value {
        None | Some("") | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(ConfigError::InvalidValue {
            option: option.to_string(),
            value: other.to_string(),
        }),
    }
}

/// JSON form of [`Features`]: one boolean per option, all defaulting to `false`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureOptions {
    pub scan_value_for_enum: bool,
    pub definition_only: bool,
    pub keep_unknown_fields: bool,
    pub gen_deep_equal: bool,
    pub validate_set: bool,
}

impl From<FeatureOptions> for Features {
    fn from(options: FeatureOptions) -> Self {
        let mut features = Features::empty();
        features.set(Features::SCAN_VALUE_FOR_ENUM, options.scan_value_for_enum);
        features.set(Features::DEFINITION_ONLY, options.definition_only);
        features.set(Features::KEEP_UNKNOWN_FIELDS, options.keep_unknown_fields);
        features.set(Features::GEN_DEEP_EQUAL, options.gen_deep_equal);
        features.set(Features::VALIDATE_SET, options.validate_set);
        features
    }
}
