//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

mod fingerprint;
mod info;
mod init;
mod parse;
mod version;

pub use fingerprint::FingerprintStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use parse::ParseStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Extensibility**: Adding new commands requires only implementing this trait
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Where a command reads post text from.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl TextInput {
    /// Post text from the argument, the file, or stdin, in that order.
    pub fn read(self) -> anyhow::Result<String> {
        if let Some(text) = self.text {
            return Ok(text);
        }
        if let Some(path) = self.file {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("Cannot read post text from {}", path.display()));
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Cannot read post text from stdin")?;
        Ok(buf)
    }
}
