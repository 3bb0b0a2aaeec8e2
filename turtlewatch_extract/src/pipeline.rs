//! Extraction pipeline for turtle sighting posts.
//!
//! The pipeline owns the loaded vocabulary in compiled form and runs the
//! timestamp, classification and location extractors over the same cleaned
//! text, merging their output into one record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use turtlewatch_config::{KeywordConfig, KeywordStore, Result};
use turtlewatch_core::{Extraction, ParsedRecord, fingerprint, normalize};

use crate::classifier::{FieldClassifier, lower_collapsed};
use crate::date::PastBiasedDateParser;
use crate::location::LocationResolver;
use crate::timestamp::TimestampExtractor;

/// Compiled, read-only extraction pipeline.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
/// Reloading the vocabulary means building a new pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    timestamps: TimestampExtractor,
    classifier: FieldClassifier,
    locations: LocationResolver,
}

/// A post after normalization and extraction, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestedPost {
    /// Normalized post text.
    pub content: String,
    /// Dedup key computed over `content`.
    pub fingerprint: String,
    #[serde(flatten)]
    pub extraction: Extraction,
}

impl Pipeline {
    /// Build a pipeline resolving year-less dates against today's date.
    ///
    /// # Errors
    /// Returns an error if a timestamp pattern fails to compile.
    pub fn new(config: &KeywordConfig) -> Result<Self> {
        Self::with_date_parser(config, PastBiasedDateParser::default())
    }

    /// Build a pipeline resolving year-less dates relative to `today`.
    pub fn with_reference_date(config: &KeywordConfig, today: NaiveDate) -> Result<Self> {
        Self::with_date_parser(config, PastBiasedDateParser::new(today))
    }

    fn with_date_parser(config: &KeywordConfig, parser: PastBiasedDateParser) -> Result<Self> {
        Ok(Self {
            timestamps: TimestampExtractor::new(config, parser)?,
            classifier: FieldClassifier::new(config),
            locations: LocationResolver::new(config),
        })
    }

    /// Ensure the config file exists, load it and build the pipeline.
    pub fn from_store(store: &KeywordStore) -> Result<Self> {
        let config = store.open()?;
        Self::new(&config)
    }

    /// Run every extractor over `text` and collect recovered faults.
    ///
    /// `text` should already be normalized. Field groups are independent:
    /// a fault or a miss in one never empties another.
    #[must_use]
    pub fn extract(&self, text: &str) -> Extraction {
        let mut faults = Vec::new();
        let lowered = lower_collapsed(text);

        let mut record = self.classifier.classify(text);

        record.post_date = self.timestamps.extract(text).unwrap_or_else(|fault| {
            warn!("{fault}");
            faults.push(fault);
            None
        });

        if let Some(location) = self.locations.resolve(&lowered) {
            record.area = Some(location.area);
            record.district = Some(location.district);
            record.province = Some(location.province);
        }

        debug!(
            "Extracted record with {} fault(s): date={:?} area={:?}",
            faults.len(),
            record.post_date,
            record.area
        );
        Extraction { record, faults }
    }

    /// Extract a record from cleaned text, dropping fault details.
    #[must_use]
    pub fn parse_details(&self, text: &str) -> ParsedRecord {
        self.extract(text).record
    }

    /// Normalize raw input, extract from it and fingerprint the normalized
    /// text, in that order.
    #[must_use]
    pub fn ingest(&self, raw: &str) -> IngestedPost {
        let content = normalize(raw);
        let extraction = self.extract(&content);
        let fingerprint = fingerprint(&content);
        IngestedPost {
            content,
            fingerprint,
            extraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turtlewatch_core::{FieldGroup, Status};

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn pipeline() -> Pipeline {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
        Pipeline::with_reference_date(&KeywordConfig::builtin(), today)
            .expect("builtin pipeline should build")
    }

    #[test]
    fn pipeline_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();
    }

    #[test]
    fn end_to_end_release() {
        let record = pipeline()
            .parse_details("Ali Khan released a green turtle in Jiwani on March 2, 2024");
        assert_eq!(record.account_name.as_deref(), Some("Ali Khan"));
        assert_eq!(record.status, Some(Status::Alive));
        assert_eq!(record.species.as_deref(), Some("Green Turtle"));
        assert_eq!(record.turtle_count, Some(1));
        assert_eq!(record.area.as_deref(), Some("Jiwani"));
        assert_eq!(record.district.as_deref(), Some("Gwadar"));
        assert_eq!(record.province.as_deref(), Some("Balochistan"));
        assert_eq!(record.post_date_iso().as_deref(), Some("2024-03-02"));
        assert_eq!(record.interaction, None);
    }

    #[test]
    fn missing_keywords_yield_nulls() {
        let extraction = pipeline().extract("what a lovely sunset over the sea");
        assert!(extraction.is_clean());
        let record = extraction.record;
        assert_eq!(record.species, None);
        assert_eq!(record.interaction, None);
        assert_eq!(record.area, None);
        assert_eq!(record.district, None);
        assert_eq!(record.province, None);
    }

    #[test]
    fn unresolved_date_is_a_fault_not_a_failure() {
        let extraction = pipeline().extract("Olive ridley found dead at Pasni 30 feb 2024");
        assert_eq!(extraction.record.post_date, None);
        assert_eq!(extraction.faults_for(FieldGroup::Timestamp).count(), 1);
        assert_eq!(extraction.record.status, Some(Status::Dead));
        assert_eq!(extraction.record.species.as_deref(), Some("Olive Ridley"));
        assert_eq!(extraction.record.area.as_deref(), Some("Pasni"));
    }

    #[test]
    fn ingest_normalizes_before_fingerprinting() {
        let p = pipeline();
        let a = p.ingest("Ali Khan \u{2014} released a green turtle\u{2026} @Jiwani");
        let b = p.ingest("Ali Khan released a green turtle Jiwani");
        assert_eq!(a.content, "Ali Khan released a green turtle Jiwani");
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.extraction.record.area.as_deref(), Some("Jiwani"));
    }

    #[test]
    fn multi_line_posts_join_lines_before_fingerprinting() {
        let p = pipeline();
        let post = p.ingest("Ali Khan\nreleased a green turtle\r\nJiwani");
        assert_eq!(post.content, "Ali Khanreleased a green turtleJiwani");
        assert_eq!(post.fingerprint, fingerprint("Ali Khanreleased a green turtleJiwani"));
        assert_ne!(post.fingerprint, fingerprint("Ali Khan released a green turtle Jiwani"));
        assert_eq!(
            post.extraction.record.account_name.as_deref(),
            Some("Ali Khanreleased")
        );
        assert_eq!(post.extraction.record.area.as_deref(), Some("Jiwani"));
    }
}
