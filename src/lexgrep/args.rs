use clap::Parser;
use lexgrep::version::version_string;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lexgrep", version = version_string())]
#[command(about = "Search a dictionary of words from the terminal using regular expressions")]
pub struct Cli {
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

    /// Online dictionary search format for embedded URLs. Replaces %s in
    /// the format with the matched word. Leave blank to disable embedded
    /// URLs.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Layout width in columns (defaults to the detected terminal width)
    #[arg(long)]
    pub width: Option<usize>,

    /// A regular expression defining the words you want to match
    pub pattern: String,
}
