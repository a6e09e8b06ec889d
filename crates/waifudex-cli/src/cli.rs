//! CLI argument definitions for waifudex.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `waifu` | Look up a character and print (or post) the reply |
//! | `definition` | Print the `waifu` slash-command declaration |
//! | `providers` | Show the fallback chain and each provider's gender policy |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `10000` | Per-request timeout in ms |
//! | `--max-field-chars` | `1024` | Embed field truncation limit |
//! | `--skip` | none | Remove a provider from the chain (repeatable) |
//! | `--filter-all` | `false` | Apply the female filter to every provider |
//! | `--user-agent` | `waifudex/<version>` | User-Agent for outgoing requests |
//! | `--log-format` | `text` | Log format on stderr (text, json) |
//!
//! # Examples
//!
//! ```bash
//! waifudex waifu Rem
//! waifudex waifu Asuna Yuuki --format json --pretty
//! waifudex waifu Megumin --skip anilist --skip jikan
//! WAIFUDEX_BOT_TOKEN=... waifudex waifu Rem --channel 123456789012345678
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use waifudex_core::ProviderId;

/// Anime character lookup behind the `waifu` chat command.
#[derive(Debug, Parser)]
#[command(
    name = "waifudex",
    author,
    version,
    about = "Anime character lookup with provider fallback",
    long_about = "Looks a character up on AniList, then Jikan, waifu.im and waifu.it, \
and renders the first accepted result the way the `waifu` bot command does.\n\
\n\
Logs go to stderr and honour RUST_LOG."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Maximum characters per embed field before truncation.
    #[arg(long, global = true, default_value_t = 1024)]
    pub max_field_chars: usize,

    /// Remove a provider from the fallback chain. May be repeated.
    ///
    /// Accepts anilist, jikan (or mal), waifu_im (or waifu.im) and waifu_it (or waifu.it).
    #[arg(long, global = true)]
    pub skip: Vec<ProviderId>,

    /// Apply the female filter to every provider, not only AniList.
    #[arg(long, global = true, default_value_t = false)]
    pub filter_all: bool,

    /// API token for waifu.it, sent as the Authorization header.
    #[arg(long, global = true)]
    pub waifu_it_token: Option<String>,

    /// User-Agent sent to the providers and to Discord.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Log line format written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable reply.
    Text,
    /// JSON envelope with metadata and provider errors.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a character by name.
    ///
    /// # Examples
    ///
    ///   waifudex waifu Rem
    ///   waifudex waifu Zero Two --format json
    Waifu(WaifuArgs),

    /// Print the `waifu` slash-command declaration as JSON.
    Definition,

    /// Show the provider chain in fallback order.
    Providers,
}

#[derive(Debug, Args)]
pub struct WaifuArgs {
    /// Character name. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,

    /// Post the reply to this Discord channel using WAIFUDEX_BOT_TOKEN.
    #[arg(long)]
    pub channel: Option<String>,
}

impl WaifuArgs {
    pub fn joined_name(&self) -> String {
        self.name.join(" ")
    }
}
