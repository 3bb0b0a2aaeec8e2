//! Structured sighting records produced by the extraction pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Condition of the turtle reported in a post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Alive,
    Dead,
}

impl Status {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alive" => Ok(Self::Alive),
            "dead" => Ok(Self::Dead),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}

/// One record per extraction call. Every field is independently optional;
/// a missing field never blocks another from being filled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedRecord {
    pub account_name: Option<String>,
    /// Serialized as `YYYY-MM-DD`.
    pub post_date: Option<NaiveDate>,
    pub turtle_count: Option<u32>,
    pub status: Option<Status>,
    pub species: Option<String>,
    pub interaction: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
}

impl ParsedRecord {
    /// The post date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn post_date_iso(&self) -> Option<String> {
        self.post_date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// True when no field could be extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.account_name.is_none()
            && self.post_date.is_none()
            && self.turtle_count.is_none()
            && self.status.is_none()
            && self.species.is_none()
            && self.interaction.is_none()
            && self.area.is_none()
            && self.district.is_none()
            && self.province.is_none()
    }
}

/// Groups of fields that are extracted independently of each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    AccountName,
    Timestamp,
    TurtleCount,
    Status,
    Species,
    Interaction,
    Location,
}

impl FieldGroup {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::AccountName => "account_name",
            Self::Timestamp => "timestamp",
            Self::TurtleCount => "turtle_count",
            Self::Status => "status",
            Self::Species => "species",
            Self::Interaction => "interaction",
            Self::Location => "location",
        }
    }
}

/// A recovered fault in one field group. The affected fields are left empty
/// and the rest of the record is still returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{} extraction failed: {reason}", .group.as_str())]
pub struct ClassificationFault {
    pub group: FieldGroup,
    pub reason: String,
}

impl ClassificationFault {
    #[must_use]
    pub fn new(group: FieldGroup, reason: impl Into<String>) -> Self {
        Self {
            group,
            reason: reason.into(),
        }
    }
}

/// Result of running the pipeline over one post: whatever could be extracted,
/// plus the faults that were recovered along the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Extraction {
    pub record: ParsedRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<ClassificationFault>,
}

impl Extraction {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }

    /// Faults recorded for a given field group.
    pub fn faults_for(&self, group: FieldGroup) -> impl Iterator<Item = &ClassificationFault> {
        self.faults.iter().filter(move |f| f.group == group)
    }
}
