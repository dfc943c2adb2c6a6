use clap::Parser;
use lexgrep::version::version_string;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lexphrase", version = version_string())]
#[command(about = "Compose random phrases from dictionary words matching regular expressions")]
pub struct Cli {
    /// Repeat this N times
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Perform a case insensitive search
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Include proper nouns (beginning with a capital letter) if any exist
    /// in the dictionary
    #[arg(long)]
    pub allow_proper_nouns: bool,

    /// Include words ending in apostrophe-s if any exist in the dictionary
    #[arg(long)]
    pub allow_plurals: bool,

    /// Manually specify a file to search
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    /// Accepted for flag parity with lexgrep; phrases never embed URLs
    #[arg(short, long)]
    pub search: Option<String>,

    /// Multiple regular expressions defining the phrase you want to match
    #[arg(required = true, num_args = 1..)]
    pub patterns: Vec<String>,
}
