//! Post date recognition inside noisy captions.

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;
use turtlewatch_config::{KeywordConfig, Result};
use turtlewatch_core::{ClassificationFault, FieldGroup};

use crate::date::PastBiasedDateParser;

/// Finds the first configured date pattern in a post and resolves it.
#[derive(Debug, Clone)]
pub struct TimestampExtractor {
    /// Compiled case-insensitively, in declared order.
    patterns: Vec<Regex>,
    parser: PastBiasedDateParser,
}

impl TimestampExtractor {
    /// Compile the config's timestamp patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid regex.
    pub fn new(config: &KeywordConfig, parser: PastBiasedDateParser) -> Result<Self> {
        Ok(Self {
            patterns: config.compile_timestamp_patterns()?,
            parser,
        })
    }

    /// Extract the post date from cleaned text.
    ///
    /// Only the first pattern that matches is considered. If the matched text
    /// cannot be resolved to a date, later patterns are not tried and a fault
    /// is returned instead. `Ok(None)` means no pattern matched at all.
    pub fn extract(&self, text: &str) -> std::result::Result<Option<NaiveDate>, ClassificationFault> {
        let Some(matched) = self.patterns.iter().find_map(|re| re.find(text)) else {
            return Ok(None);
        };

        let matched = matched.as_str();
        match self.parser.parse(matched) {
            Some(date) => {
                debug!("Resolved post date {date} from {matched:?}");
                Ok(Some(date))
            }
            None => Err(ClassificationFault::new(
                FieldGroup::Timestamp,
                format!("cannot resolve date from {matched:?}"),
            )),
        }
    }

    #[must_use]
    pub const fn parser(&self) -> &PastBiasedDateParser {
        &self.parser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> PastBiasedDateParser {
        PastBiasedDateParser::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default())
    }

    fn extractor(patterns: &[&str]) -> Result<TimestampExtractor> {
        let config = KeywordConfig {
            timestamp_patterns: patterns.iter().map(ToString::to_string).collect(),
            ..KeywordConfig::default()
        };
        TimestampExtractor::new(&config, today())
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn builtin() -> TimestampExtractor {
        TimestampExtractor::new(&KeywordConfig::builtin(), today())
            .expect("builtin patterns should compile")
    }

    #[test]
    fn month_day_year() {
        let ex = builtin();
        assert_eq!(
            ex.extract("Ali Khan released a green turtle in Jiwani on March 2, 2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 2))
        );
    }

    #[test]
    fn day_month_year_is_case_insensitive() {
        let ex = builtin();
        assert_eq!(
            ex.extract("Posted 14 AUG 2023 by WWF Pakistan"),
            Ok(NaiveDate::from_ymd_opt(2023, 8, 14))
        );
    }

    #[test]
    fn yearless_full_month_prefers_past() {
        let ex = builtin();
        assert_eq!(
            ex.extract("nesting seen on December 3 near Ormara"),
            Ok(NaiveDate::from_ymd_opt(2024, 12, 3))
        );
        assert_eq!(
            ex.extract("seen 3 january at Pasni"),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 3))
        );
    }

    #[test]
    fn no_match_is_none() {
        let ex = builtin();
        assert_eq!(ex.extract("green turtle released yesterday"), Ok(None));
        assert_eq!(ex.extract(""), Ok(None));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn unresolved_first_match_does_not_fall_through() {
        // The first pattern matches an impossible date; the second would
        // have found a valid one but must not be tried.
        let ex = extractor(&[
            r"\d{1,2}\s+feb\s+\d{4}",
            r"(january|march)\s+\d{1,2},\s*\d{4}",
        ])
        .expect("patterns should compile");
        let result = ex.extract("31 feb 2024 and March 2, 2024");
        match result {
            Err(fault) => assert_eq!(fault.group, FieldGroup::Timestamp),
            Ok(other) => panic!("expected fault, got {other:?}"),
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn pattern_order_wins_over_text_position() {
        let ex = extractor(&[r"(january|march)\s+\d{1,2},\s*\d{4}", r"\d{1,2}\s+feb\s+\d{4}"])
            .expect("patterns should compile");
        assert_eq!(
            ex.extract("10 feb 2024 then March 2, 2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 2))
        );
    }

    #[test]
    fn month_prefixed_word_is_not_a_month() {
        let ex = builtin();
        match ex.extract("Marine 12 2024 cleanup") {
            Err(fault) => assert_eq!(fault.group, FieldGroup::Timestamp),
            Ok(other) => panic!("expected fault, got {other:?}"),
        }
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        assert!(extractor(&["(oops"]).is_err());
    }
}
