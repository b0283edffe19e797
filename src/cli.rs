//! CLI definitions for intelcard
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so command handlers can share the argument types.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use intelcard::config::OutputFormat;
use intelcard::structuring::ArtifactKind;

/// Help colors: cyan section headers, yellow flags and subcommands.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD | Effects::UNDERLINE)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Yellow.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default() | Effects::ITALIC)
        .valid(AnsiColor::Yellow.on_default())
        .invalid(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "intelcard")]
#[command(about = "[ intelcard ] - turn raw model output into intelligence cards, minutes and scripts")]
#[command(
    long_about = "intelcard - structure raw generative-model output.

Takes the verbatim text a model returned for a meeting transcript and turns it
into typed, render-ready artifacts: an internal intelligence card, external
meeting minutes, an output/rationale pair, or a four-part advisory document.
Any one FILE argument may be '-' to read from stdin.

QUICK START:
    intelcard card internal.txt             Render the intelligence card
    intelcard minutes external.txt          Print email and markdown minutes
    intelcard decode advice.txt --copy      Print the consultant script only
    intelcard meeting --internal a.txt --external b.txt

CONFIGURATION:
    Rules and defaults are read from ~/.config/intelcard/config.toml.
    Run 'intelcard rules' to print the effective rule table."
)]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
    /// Config file to use instead of ~/.config/intelcard/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log every classification decision to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode an intelligence card and render it as markdown
    #[command(long_about = "Decode a strategy-analysis response into an intelligence card.

The response must be JSON, optionally wrapped in a ```json code fence.
Missing fields and unknown enum values are reported with their field path.

EXAMPLES:
    intelcard card internal.txt
    intelcard card internal.txt --format json")]
    Card {
        /// Response file, or '-' for stdin
        file: String,
    },

    /// Decode meeting minutes (email + markdown versions)
    #[command(long_about = "Decode a meeting-minutes response into its email and markdown versions.

EXAMPLES:
    intelcard minutes external.txt
    intelcard minutes external.txt --part email")]
    Minutes {
        /// Response file, or '-' for stdin
        file: String,
        /// Which version to print
        #[arg(long, value_enum, default_value_t = MinutesPart::Both)]
        part: MinutesPart,
    },

    /// Split a response at its output/rationale markers
    #[command(long_about = "Split a response at its two section markers.

The default markers are [最佳化產出] and [戰略解析]; both are configurable
under [rules.markers]. Fails if the output marker is missing.

EXAMPLE:
    intelcard split advice.txt")]
    Split {
        /// Response file, or '-' for stdin
        file: String,
    },

    /// Classify free-form advisory text into its four parts
    #[command(long_about = "Classify free-form advisory text into subtext, executor framing,
consultant script and strategy tips.

EXAMPLES:
    intelcard decode advice.txt
    intelcard decode advice.txt --copy    Script lines only, tags removed")]
    Decode {
        /// Response file, or '-' for stdin
        file: String,
        /// Print only the consultant script, ready to paste
        #[arg(long)]
        copy: bool,
    },

    /// Structure both halves of a meeting analysis
    #[command(long_about = "Structure the internal card and the external minutes independently.

A failure in one half is reported and the other half is still printed.
The command fails only when both halves fail.

EXAMPLE:
    intelcard meeting --internal internal.txt --external external.txt")]
    Meeting {
        /// Internal strategy-analysis response
        #[arg(long, value_name = "FILE")]
        internal: String,
        /// External meeting-minutes response
        #[arg(long, value_name = "FILE")]
        external: String,
    },

    /// Structure many responses in parallel
    #[command(long_about = "Structure many responses of the same kind in parallel.

Results are reported in input order, one per file. The command fails if
any file fails.

EXAMPLE:
    intelcard batch --kind decode responses/*.txt")]
    Batch {
        /// Artifact kind: card, minutes, split or decode
        #[arg(long)]
        kind: ArtifactKind,
        /// Response files
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Print the effective rule table as TOML
    Rules,
}

/// Part of the meeting minutes to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MinutesPart {
    Email,
    Markdown,
    Both,
}
