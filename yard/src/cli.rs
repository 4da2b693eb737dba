use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

#[derive(clap::Parser, Debug, Clone, Default)]
#[clap(styles = CARGO_STYLING)]
pub struct Cli {
    /// Expression file, one expression per line
    pub file: Option<PathBuf>,

    /// Do not print diagnostics
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Read input from stdin
    #[arg(long, default_value_t = false)]
    pub stdin: bool,

    /// Evaluate through the recursive-descent reference pipeline
    #[arg(long, default_value_t = false)]
    pub ast: bool,
}

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);
