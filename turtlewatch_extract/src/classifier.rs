//! Keyword-driven field classification.
//!
//! Every field is a literal substring scan over a lower-cased copy of the
//! post; there is no stemming or fuzzy matching.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use turtlewatch_config::{KeywordConfig, KeywordTable};
use turtlewatch_core::{ParsedRecord, Status};

/// Leading run of Title-Case words, e.g. "Ali Khan" in "Ali Khan released...".
static ACCOUNT_NAME: Lazy<Option<Regex>> =
    Lazy::new(|| compile_or_warn("account name", r"^([A-Z][a-z]+(?:\s[A-Z][a-z]+)*)"));

/// Compile a built-in pattern. A failure disables the field it serves and is
/// logged once, instead of aborting extraction.
fn compile_or_warn(field: &str, pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| warn!("Disabling {field} extraction, pattern {pattern:?} is invalid: {e}"))
        .ok()
}

/// Matches keywords from a [`KeywordConfig`] against post text.
#[derive(Debug, Clone)]
pub struct FieldClassifier {
    turtle: Vec<String>,
    dead: Vec<String>,
    alive: Vec<String>,
    species: Vec<(String, String)>,
    interaction: Vec<(String, String)>,
}

impl FieldClassifier {
    /// Prepare matchers from the config. Keywords are lower-cased so they
    /// compare against lower-cased text; blank keywords are dropped since they
    /// would match every post.
    #[must_use]
    pub fn new(config: &KeywordConfig) -> Self {
        Self {
            turtle: keyword_set("turtle_keywords", &config.turtle_keywords),
            dead: keyword_set("dead_keywords", &config.dead_keywords),
            alive: keyword_set("alive_keywords", &config.alive_keywords),
            species: label_table("species_keywords", &config.species_keywords),
            interaction: label_table("interaction_keywords", &config.interaction_keywords),
        }
    }

    /// Fill the classifier-owned fields of a record: account name, turtle
    /// count, status, species and interaction. Each is decided on its own.
    #[must_use]
    pub fn classify(&self, text: &str) -> ParsedRecord {
        let lowered = lower_collapsed(text);

        let record = ParsedRecord {
            account_name: Self::account_name(text),
            turtle_count: self.turtle_count(&lowered),
            status: self.status(&lowered),
            species: first_label(&self.species, &lowered),
            interaction: first_label(&self.interaction, &lowered),
            ..ParsedRecord::default()
        };

        debug!(
            "Classified post: account={:?} count={:?} status={:?} species={:?} interaction={:?}",
            record.account_name,
            record.turtle_count,
            record.status,
            record.species,
            record.interaction
        );
        record
    }

    /// Guess the reporter from a leading capitalized name in original case.
    #[must_use]
    pub fn account_name(text: &str) -> Option<String> {
        let re = ACCOUNT_NAME.as_ref()?;
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    /// `Some(1)` when any turtle keyword occurs. Multiple turtles are not
    /// counted.
    #[must_use]
    pub fn turtle_count(&self, lowered: &str) -> Option<u32> {
        contains_any(&self.turtle, lowered).then_some(1)
    }

    /// Dead keywords are checked before alive ones, so a post mentioning both
    /// ("washed up ... released") is recorded as dead.
    #[must_use]
    pub fn status(&self, lowered: &str) -> Option<Status> {
        if contains_any(&self.dead, lowered) {
            Some(Status::Dead)
        } else if contains_any(&self.alive, lowered) {
            Some(Status::Alive)
        } else {
            None
        }
    }

    #[must_use]
    pub fn species(&self, lowered: &str) -> Option<String> {
        first_label(&self.species, lowered)
    }

    #[must_use]
    pub fn interaction(&self, lowered: &str) -> Option<String> {
        first_label(&self.interaction, lowered)
    }
}

/// Lower-case and collapse whitespace without touching the caller's text.
#[must_use]
pub fn lower_collapsed(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_any(keywords: &[String], lowered: &str) -> bool {
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}

fn first_label(table: &[(String, String)], lowered: &str) -> Option<String> {
    table
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword.as_str()))
        .map(|(_, label)| label.clone())
}

fn prepare(section: &str, keyword: &str) -> Option<String> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        warn!("Ignoring blank keyword in {section}");
        None
    } else {
        Some(keyword)
    }
}

fn keyword_set(section: &str, keywords: &[String]) -> Vec<String> {
    keywords.iter().filter_map(|k| prepare(section, k)).collect()
}

pub(crate) fn label_table(section: &str, table: &KeywordTable) -> Vec<(String, String)> {
    table
        .iter()
        .filter_map(|e| prepare(section, &e.keyword).map(|k| (k, e.label.clone())))
        .collect()
}
