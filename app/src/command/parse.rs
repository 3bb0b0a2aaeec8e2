use tracing::info;
use turtlewatch_config::KeywordStore;
use turtlewatch_extract::Pipeline;

use super::TextInput;

/// Strategy for extracting a record from one post.
///
/// Prints the normalized content, its fingerprint, the extracted record and
/// any recovered faults as one JSON object on stdout.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = (KeywordStore, TextInput);

    fn execute(&self, (store, input): Self::Input) -> anyhow::Result<()> {
        let pipeline = Pipeline::from_store(&store)?;
        info!("Loaded keyword config from {}", store.path().display());

        let raw = input.read()?;
        let post = pipeline.ingest(&raw);
        if !post.extraction.is_clean() {
            info!(
                "Extraction recovered from {} fault(s)",
                post.extraction.faults.len()
            );
        }

        println!("{}", serde_json::to_string_pretty(&post)?);
        Ok(())
    }
}
