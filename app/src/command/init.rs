use turtlewatch_config::KeywordStore;

/// Strategy for creating the default keyword config.
///
/// An existing file is left as it is, so running `init` twice is harmless.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = KeywordStore;

    fn execute(&self, store: Self::Input) -> anyhow::Result<()> {
        if store.ensure_config()? {
            println!("Created keyword config at: {}", store.path().display());
        } else {
            println!(
                "Keyword config already exists at: {}. Edit it directly to change keywords.",
                store.path().display()
            );
        }
        Ok(())
    }
}
