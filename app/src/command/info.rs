use turtlewatch_config::{KeywordStore, KeywordTable};

/// Strategy for displaying the keyword vocabulary.
///
/// Loads (and if needed creates) the config and prints every section in
/// the order classification will try it.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = KeywordStore;

    fn execute(&self, store: Self::Input) -> anyhow::Result<()> {
        let config = store.open()?;

        println!("=== turtlewatch Configuration ===\n");
        println!("Config file: {}\n", store.path().display());

        println!("Timestamp Patterns ({}):", config.timestamp_patterns.len());
        for (i, pattern) in config.timestamp_patterns.iter().enumerate() {
            println!("  {}. {}", i + 1, truncate(pattern, 70));
        }
        println!();

        print_list("Turtle Keywords", &config.turtle_keywords);
        print_list("Dead Keywords", &config.dead_keywords);
        print_list("Alive Keywords", &config.alive_keywords);
        print_table("Species", &config.species_keywords);
        print_table("Interactions", &config.interaction_keywords);
        print_table("Locations", &config.location_keywords);

        Ok(())
    }
}

fn print_list(title: &str, keywords: &[String]) {
    println!("{title} ({}):", keywords.len());
    if keywords.is_empty() {
        println!("  (empty)");
    } else {
        println!("  {}", keywords.join(", "));
    }
    println!();
}

fn print_table(title: &str, table: &KeywordTable) {
    println!("{title} ({}):", table.len());
    if table.is_empty() {
        println!("  (empty)");
    }
    for entry in table {
        println!("  {} -> {}", entry.keyword, entry.label);
    }
    println!();
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
