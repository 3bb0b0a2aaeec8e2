#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Text-to-record extraction for turtle sighting posts.
//!
//! Each extractor runs independently over the same normalized text; the
//! [`Pipeline`] merges their output into one [`ParsedRecord`].

pub mod classifier;
pub mod date;
pub mod location;
mod pipeline;
pub mod timestamp;

pub use classifier::FieldClassifier;
pub use date::PastBiasedDateParser;
pub use location::{Location, LocationResolver};
pub use pipeline::{IngestedPost, Pipeline};
pub use timestamp::TimestampExtractor;

pub use turtlewatch_core::{ClassificationFault, Extraction, FieldGroup, ParsedRecord, Status};
