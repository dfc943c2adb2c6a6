use clap::Parser;
use lexgrep::config;
use lexgrep::error::Result;
use lexgrep::filter::WordFilter;
use lexgrep::layout::ColumnLayout;
use lexgrep::output;
use lexgrep::search::{search_file, SearchOptions};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_or_default();

    let dict = cli.dict.unwrap_or(config.dict);
    let search_url = cli.search.unwrap_or(config.search);
    let link_template = (!search_url.is_empty()).then_some(search_url.as_str());
    let width = cli.width.unwrap_or_else(output::terminal_width);

    let opts = SearchOptions {
        case_insensitive: cli.case_insensitive,
        filter: WordFilter {
            allow_proper_nouns: cli.allow_proper_nouns,
            allow_plurals: cli.allow_plurals,
        },
    };

    let matches = search_file(&dict, &cli.pattern, &opts)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_summary(&mut out, matches.len(), &cli.pattern)?;

    let layout = ColumnLayout::fit(&matches, width);
    output::write_matches(&mut out, &matches, &layout, link_template)?;

    Ok(())
}
