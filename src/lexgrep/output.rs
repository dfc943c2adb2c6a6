use crate::config::URL_TOKEN;
use crate::highlight::{MatchSegment, WordMatch};
use crate::layout::{ColumnLayout, COLUMN_GAP};
use crate::phrase::{Phrase, PhraseSlot, PLACEHOLDER};
use colored::Colorize;
use console::Term;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Width assumed when the terminal size cannot be detected.
pub const DEFAULT_WIDTH: usize = 80;

pub fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Renders a match with its matched spans in bold red. The markers are
/// zero-width, so padding math stays based on the original word.
pub fn styled_word(m: &WordMatch) -> String {
    let mut out = String::new();
    for seg in &m.segments {
        match seg {
            MatchSegment::Plain(text) => out.push_str(text),
            MatchSegment::Match(text) => out.push_str(&text.red().bold().to_string()),
        }
    }
    out
}

pub fn write_summary<W: Write>(out: &mut W, count: usize, pattern: &str) -> io::Result<()> {
    writeln!(
        out,
        "There were {} matches for the string {}",
        count.to_string().bold(),
        format!("/{}/", pattern).bold()
    )
}

/// OSC-8 hyperlink, BEL-terminated.
fn hyperlink(url: &str, label: &str) -> String {
    format!("\x1b]8;;{}\x07{}\x1b]8;;\x07", url, label)
}

/// Writes the match grid row-major: a gap before every column but the
/// first, a line break before every row but the first, each entry padded
/// to its column width. Ends with a newline even when there are no rows.
pub fn write_matches<W: Write>(
    out: &mut W,
    matches: &[WordMatch],
    layout: &ColumnLayout,
    link_template: Option<&str>,
) -> io::Result<()> {
    for (idx, m) in matches.iter().enumerate() {
        let col = idx % layout.columns;
        if col != 0 {
            write!(out, "{}", COLUMN_GAP)?;
        } else if idx != 0 {
            writeln!(out)?;
        }

        let label = styled_word(m);
        match link_template {
            Some(template) => {
                let url = template.replace(URL_TOKEN, &m.word);
                write!(out, "{}", hyperlink(&url, &label))?;
            }
            None => write!(out, "{}", label)?,
        }

        let pad = layout.width_of(col).saturating_sub(m.word.width());
        write!(out, "{}", " ".repeat(pad))?;
    }
    writeln!(out)
}

/// One phrase per line, slots joined by a single space.
pub fn write_phrases<W: Write>(out: &mut W, phrases: &[Phrase]) -> io::Result<()> {
    for phrase in phrases {
        let rendered: Vec<String> = phrase
            .slots
            .iter()
            .map(|slot| match slot {
                PhraseSlot::Word(m) => styled_word(m),
                PhraseSlot::Placeholder => PLACEHOLDER.to_string(),
            })
            .collect();
        writeln!(out, "{}", rendered.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_word(word: &str) -> WordMatch {
        WordMatch {
            word: word.to_string(),
            segments: vec![MatchSegment::Match(word.to_string())],
        }
    }

    fn render(matches: &[WordMatch], width: usize, template: Option<&str>) -> String {
        colored::control::set_override(false);
        let layout = ColumnLayout::fit(matches, width);
        let mut buf = Vec::new();
        write_matches(&mut buf, matches, &layout, template).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_wording() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_summary(&mut buf, 2, "ap").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "There were 2 matches for the string /ap/\n"
        );
    }

    #[test]
    fn test_grid_three_columns() {
        let matches: Vec<WordMatch> = ["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"]
            .iter()
            .map(|w| plain_word(w))
            .collect();
        assert_eq!(
            render(&matches, 20, None),
            "aaaaa  bbbbb  ccccc\nddddd  eeeee\n"
        );
    }

    #[test]
    fn test_grid_pads_to_column_width() {
        let matches: Vec<WordMatch> = ["aaaa", "bb", "cc", "d"]
            .iter()
            .map(|w| plain_word(w))
            .collect();
        // Columns are [4, 2]; the short entries pick up trailing spaces.
        assert_eq!(render(&matches, 10, None), "aaaa  bb\ncc    d \n");
    }

    #[test]
    fn test_empty_results_emit_bare_newline() {
        assert_eq!(render(&[], 80, None), "\n");
    }

    #[test]
    fn test_hyperlink_wrapping() {
        let matches = vec![plain_word("apple")];
        let rendered = render(&matches, 80, Some("https://example.com/%s"));
        assert_eq!(
            rendered,
            "\x1b]8;;https://example.com/apple\x07apple\x1b]8;;\x07\n"
        );
    }

    #[test]
    fn test_url_substitutes_original_not_label() {
        colored::control::set_override(false);
        // A word with a plain prefix: the URL must carry the bare word.
        let m = WordMatch {
            word: "grapefruit".to_string(),
            segments: vec![
                MatchSegment::Plain("gr".to_string()),
                MatchSegment::Match("ap".to_string()),
                MatchSegment::Plain("efruit".to_string()),
            ],
        };
        let rendered = render(std::slice::from_ref(&m), 80, Some("https://d.com/%s"));
        assert!(rendered.contains("\x1b]8;;https://d.com/grapefruit\x07"));
    }

    #[test]
    fn test_styled_word_strips_back_to_original() {
        colored::control::set_override(false);
        let m = WordMatch {
            word: "banana".to_string(),
            segments: vec![
                MatchSegment::Plain("b".to_string()),
                MatchSegment::Match("anana".to_string()),
            ],
        };
        assert_eq!(styled_word(&m), "banana");
    }

    #[test]
    fn test_write_phrases_joins_with_single_space() {
        colored::control::set_override(false);
        let phrases = vec![
            Phrase {
                slots: vec![
                    PhraseSlot::Word(plain_word("big")),
                    PhraseSlot::Placeholder,
                    PhraseSlot::Word(plain_word("cat")),
                ],
            },
            Phrase {
                slots: vec![PhraseSlot::Word(plain_word("small"))],
            },
        ];
        let mut buf = Vec::new();
        write_phrases(&mut buf, &phrases).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "big * cat\nsmall\n");
    }
}
