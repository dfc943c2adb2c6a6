//! # Lexgrep Architecture
//!
//! Lexgrep is a word-list search library with two thin CLI clients: `lexgrep`
//! (search and display) and `lexphrase` (random phrase generation). The
//! binaries only parse arguments, resolve configuration, and print; everything
//! observable about a search is computable through this library.
//!
//! ## Data Flow
//!
//! ```text
//! word list ──> search (filter + highlight) ──> Vec<WordMatch>
//!                                                   │
//!                         layout (greedy column fit)│
//!                                                   ▼
//!                              output (grid / summary / links) ──> stdout
//! ```
//!
//! Phrase mode runs one search per pattern, then draws random picks:
//!
//! ```text
//! patterns ──> search (once each) ──> phrase (random slots) ──> output
//! ```
//!
//! The search pass is eager: the whole result set is materialized before any
//! layout work, because column widths depend on every entry's width.
//!
//! ## Module Overview
//!
//! - [`search`]: reads the word list, applies the filter, collects matches
//! - [`filter`]: eligibility rules (blank lines, proper nouns, possessives)
//! - [`highlight`]: splits matching words into plain/matched segments
//! - [`layout`]: fits matches into the widest column grid that fits
//! - [`output`]: terminal rendering, summary line, OSC-8 hyperlinks
//! - [`phrase`]: random phrase composition across several patterns
//! - [`config`]: config file with the word-list path and URL template
//! - [`error`]: error types
//! - [`version`]: build-time version string for both binaries
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! `search`, `filter`, `highlight`, `layout`, and `phrase` never touch
//! stdout/stderr or the terminal; `output` takes any `Write`. Only the
//! binaries decide about exit codes and detected width.

pub mod config;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod layout;
pub mod output;
pub mod phrase;
pub mod search;
pub mod version;
