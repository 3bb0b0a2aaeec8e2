#![deny(
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

pub mod normalize;
pub mod record;
pub mod util;

pub use normalize::normalize;
pub use record::{ClassificationFault, Extraction, FieldGroup, ParsedRecord, Status};
pub use util::{FingerprintFault, fingerprint, fingerprint_bytes};
