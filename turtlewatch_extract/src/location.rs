//! Town → district → province resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;
use turtlewatch_config::KeywordConfig;

use crate::classifier::label_table;

/// Districts that belong to Balochistan; every other district is in Sindh.
const BALOCHISTAN_DISTRICTS: &[&str] = &["Gwadar", "Lasbela"];
const BALOCHISTAN: &str = "Balochistan";
const SINDH: &str = "Sindh";

/// Administrative location attributed to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub area: String,
    pub district: String,
    pub province: String,
}

/// Resolves the first known town mentioned in a post.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    towns: Vec<(String, String)>,
}

impl LocationResolver {
    #[must_use]
    pub fn new(config: &KeywordConfig) -> Self {
        Self {
            towns: label_table("location_keywords", &config.location_keywords),
        }
    }

    /// Look up the first town, in declared order, occurring in `lowered`.
    /// Only one location is ever attributed even if several towns appear.
    #[must_use]
    pub fn resolve(&self, lowered: &str) -> Option<Location> {
        let (town, district) = self
            .towns
            .iter()
            .find(|(town, _)| lowered.contains(town.as_str()))?;

        let location = Location {
            area: title_case(town),
            district: district.clone(),
            province: province_for(district).to_string(),
        };
        debug!(
            "Resolved location {} / {} / {}",
            location.area, location.district, location.province
        );
        Some(location)
    }
}

/// Province that contains `district`.
#[must_use]
pub fn province_for(district: &str) -> &'static str {
    if BALOCHISTAN_DISTRICTS.contains(&district) {
        BALOCHISTAN
    } else {
        SINDH
    }
}

/// Capitalize the first letter of each run of cased letters and lower-case
/// the rest ("west bay gwadar" → "West Bay Gwadar").
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if !cased {
            out.push(c);
        } else if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = cased;
    }
    out
}
