use clap::Parser;
use lexgrep::config;
use lexgrep::error::Result;
use lexgrep::filter::WordFilter;
use lexgrep::output;
use lexgrep::phrase::compose_phrases;
use lexgrep::search::SearchOptions;

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
    // The -s flag parses but phrase output never embeds URLs.
    let _ = cli.search;

    let opts = SearchOptions {
        case_insensitive: cli.case_insensitive,
        filter: WordFilter {
            allow_proper_nouns: cli.allow_proper_nouns,
            allow_plurals: cli.allow_plurals,
        },
    };

    let phrases = compose_phrases(&cli.patterns, cli.count, &dict, &opts)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_phrases(&mut out, &phrases)?;

    Ok(())
}
