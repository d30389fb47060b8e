//! Internationalization value objects
//!
//! Metadata kinds, localized strings and the key under which I18N data
//! access objects register themselves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of object an I18N metadata record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    /// Feature of interest
    Feature,
    /// Observable property
    ObservableProperty,
    /// Procedure (sensor, process)
    Procedure,
    /// Offering
    Offering,
}

impl MetadataKind {
    /// All kinds, in declaration order
    pub const ALL: [MetadataKind; 4] = [
        MetadataKind::Feature,
        MetadataKind::ObservableProperty,
        MetadataKind::Procedure,
        MetadataKind::Offering,
    ];

    /// Stable string form used in configuration and CLI
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::ObservableProperty => "observable_property",
            Self::Procedure => "procedure",
            Self::Offering => "offering",
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Unknown metadata kind '{s}'. Expected one of: feature, observable_property, procedure, offering"
                ))
            })
    }
}

/// Registry key of an I18N DAO: the metadata kind it handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct I18nDaoKey(pub MetadataKind);

impl I18nDaoKey {
    /// Key for the given metadata kind
    pub fn new(kind: MetadataKind) -> Self {
        Self(kind)
    }

    /// Metadata kind of this key
    pub fn kind(&self) -> MetadataKind {
        self.0
    }
}

impl From<MetadataKind> for I18nDaoKey {
    fn from(kind: MetadataKind) -> Self {
        Self(kind)
    }
}

impl fmt::Display for I18nDaoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i18n-dao:{}", self.0)
    }
}

/// Text in several locales, keyed by locale tag (e.g. `en`, `de-DE`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString {
    values: BTreeMap<String, String>,
}

impl LocalizedString {
    /// Empty localized string
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for `locale`
    pub fn with<L: Into<String>, V: Into<String>>(mut self, locale: L, value: V) -> Self {
        self.values.insert(locale.into(), value.into());
        self
    }

    /// Value for exactly `locale`
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }

    /// Value for `locale`, else for `fallback`
    pub fn get_or(&self, locale: &str, fallback: &str) -> Option<&str> {
        self.get(locale).or_else(|| self.get(fallback))
    }

    /// Locales present
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Whether no locale is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Localized name and description of one domain object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nMetadata {
    /// Kind of the described object
    pub kind: MetadataKind,
    /// Identifier of the described object
    pub identifier: String,
    /// Localized names
    #[serde(default)]
    pub name: LocalizedString,
    /// Localized descriptions
    #[serde(default)]
    pub description: LocalizedString,
}

impl I18nMetadata {
    /// Empty metadata for `identifier`
    pub fn new<S: Into<String>>(kind: MetadataKind, identifier: S) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            name: LocalizedString::new(),
            description: LocalizedString::new(),
        }
    }

    /// Set the localized names
    pub fn with_name(mut self, name: LocalizedString) -> Self {
        self.name = name;
        self
    }

    /// Set the localized descriptions
    pub fn with_description(mut self, description: LocalizedString) -> Self {
        self.description = description;
        self
    }
}
