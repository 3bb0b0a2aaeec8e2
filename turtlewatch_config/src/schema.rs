use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::table::KeywordTable;

/// Classification vocabulary, as persisted in `keywords.json`.
///
/// Every collection defaults to empty when its key is missing, so a
/// hand-edited file that drops a section still loads.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Regexes tried in order against post text; the first match is the date.
    #[serde(default)]
    pub timestamp_patterns: Vec<String>,
    #[serde(default)]
    pub turtle_keywords: Vec<String>,
    #[serde(default)]
    pub dead_keywords: Vec<String>,
    #[serde(default)]
    pub alive_keywords: Vec<String>,
    #[serde(default)]
    pub species_keywords: KeywordTable,
    #[serde(default)]
    pub interaction_keywords: KeywordTable,
    /// Lowercase town name → district.
    #[serde(default)]
    pub location_keywords: KeywordTable,
}

impl KeywordConfig {
    /// The built-in vocabulary written when no config file exists yet.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            timestamp_patterns: vec![
                r"\d{1,2}\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[,]?\s*\d{4}"
                    .to_string(),
                r"(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{1,2}[,]?\s*\d{4}"
                    .to_string(),
                r"(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2}(?:,\s*\d{4})?"
                    .to_string(),
                r"\d{1,2}\s+(january|february|march|april|may|june|july|august|september|october|november|december)"
                    .to_string(),
            ],
            turtle_keywords: strings(&[
                "green turtle",
                "olive ridley",
                "#greenturtle",
                "#oliveridley",
                "\u{06a9}\u{0686}\u{0648}\u{06d2}",
            ]),
            dead_keywords: strings(&["dead", "washed up", "\u{06c1}\u{0644}\u{0627}\u{06a9}"]),
            alive_keywords: strings(&["released", "rescued", "\u{0622}\u{0632}\u{0627}\u{062f}"]),
            species_keywords: [
                ("green turtle", "Green Turtle"),
                ("olive ridley", "Olive Ridley"),
                ("leatherback", "Leatherback"),
                ("loggerhead", "Loggerhead"),
                ("hawksbill", "Hawksbill"),
            ]
            .into_iter()
            .collect(),
            interaction_keywords: [
                ("stranded", "Stranded"),
                ("sighted", "Sighted"),
                ("bycatch", "Bycatch"),
            ]
            .into_iter()
            .collect(),
            location_keywords: [
                ("jiwani", "Gwadar"),
                ("ganz", "Gwadar"),
                ("pishukan", "Gwadar"),
                ("sur bandar", "Gwadar"),
                ("pasni", "Gwadar"),
                ("ormara", "Gwadar"),
                ("west bay gwadar", "Gwadar"),
                ("east bay gwadar", "Gwadar"),
                ("astola", "Gwadar"),
                ("bandari beach", "Gwadar"),
                ("karachi", "Karachi"),
                ("sonmiani", "Lasbela"),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Compile the timestamp patterns case-insensitively, in declared order.
    pub fn compile_timestamp_patterns(&self) -> Result<Vec<Regex>> {
        self.timestamp_patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ConfigError::Pattern {
                        index,
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Check that everything in the config can be used for classification.
    pub fn validate(&self) -> Result<()> {
        self.compile_timestamp_patterns().map(|_| ())
    }

    /// Render as the 4-space indented JSON document stored on disk.
    /// Non-ASCII keywords are written as-is, not escaped.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shape() {
        let config = KeywordConfig::builtin();
        assert_eq!(config.timestamp_patterns.len(), 4);
        assert_eq!(config.turtle_keywords.len(), 5);
        assert_eq!(config.dead_keywords.len(), 3);
        assert_eq!(config.alive_keywords.len(), 3);
        assert_eq!(config.species_keywords.len(), 5);
        assert_eq!(config.interaction_keywords.len(), 3);
        assert_eq!(config.location_keywords.len(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn pretty_json_layout() {
        let json = KeywordConfig::builtin()
            .to_pretty_json()
            .expect("builtin config should serialize");
        assert!(json.starts_with("{\n    \"timestamp_patterns\": [\n        \"\\\\d{1,2}\\\\s+(jan|"));
        assert!(json.contains("\"species_keywords\": {\n        \"green turtle\": \"Green Turtle\","));
        assert!(json.contains("\"\u{06a9}\u{0686}\u{0648}\u{06d2}\""));
        assert!(json.ends_with("\"sonmiani\": \"Lasbela\"\n    }\n}"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_sections_default_to_empty() {
        let config: KeywordConfig =
            serde_json::from_str(r#"{"dead_keywords": ["dead"]}"#).expect("partial config");
        assert_eq!(config.dead_keywords, ["dead"]);
        assert!(config.timestamp_patterns.is_empty());
        assert!(config.location_keywords.is_empty());
    }

    #[test]
    fn bad_pattern_is_reported_with_index() {
        let config = KeywordConfig {
            timestamp_patterns: vec![r"\d+".to_string(), "(unclosed".to_string()],
            ..KeywordConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Pattern { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn round_trips_through_disk_format() {
        let config = KeywordConfig::builtin();
        let json = config.to_pretty_json().expect("serialize");
        let back: KeywordConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
