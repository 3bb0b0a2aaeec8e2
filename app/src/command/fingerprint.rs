use turtlewatch_core::{fingerprint, normalize};

use super::TextInput;

/// Strategy for printing the dedup fingerprint of a post.
///
/// The text is normalized first, matching what `parse` fingerprints.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintStrategy;

impl super::CommandStrategy for FingerprintStrategy {
    type Input = TextInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let raw = input.read()?;
        println!("{}", fingerprint(&normalize(&raw)));
        Ok(())
    }
}
