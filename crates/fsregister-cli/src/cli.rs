//! CLI argument definitions for fsregister.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Common search across firms, individuals or funds |
//! | `resolve` | Resolve a name to a unique reference number |
//! | `firm` | Firm details by FRN |
//! | `individual` | Individual details by IRN |
//! | `fund` | Fund details by PRN |
//! | `markets` | Regulated markets |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--username` | `$FSR_API_USERNAME` | API username (registered email) |
//! | `--api-key` | `$FSR_API_KEY` | API key |
//! | `--base-url` | public register | Services root, without the API version |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! fsregister search "hiscox insurance company" --type firm
//! fsregister resolve "Hastings Insurance Services Limited"
//! fsregister firm 113849 --action passport-permissions --token Gibraltar --pretty
//! fsregister individual MXC29012 --action controlled-functions
//! ```

use clap::{Args, Parser, Subcommand};

/// Query the FCA Financial Services Register from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "fsregister",
    author,
    version,
    about = "FCA Financial Services Register API client"
)]
pub struct Cli {
    /// API username, the email address registered with the developer portal.
    #[arg(long, global = true, env = "FSR_API_USERNAME")]
    pub username: Option<String>,

    /// API key issued by the developer portal.
    #[arg(long, global = true, env = "FSR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Services root URL, without the API version segment.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log requests and resolver outcomes to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Case-insensitive common search.
    ///
    /// # Examples
    ///
    ///   fsregister search "direct line" --type firm
    ///   fsregister search jupiter --type fund
    Search(SearchArgs),

    /// Resolve a name to its unique FRN, IRN or PRN.
    ///
    /// Fails when the search returns no match or more than one match.
    Resolve(SearchArgs),

    /// Firm details by firm reference number (FRN).
    Firm(DetailArgs),

    /// Individual details by individual reference number (IRN).
    Individual(DetailArgs),

    /// Fund details by product reference number (PRN).
    Fund(DetailArgs),

    /// List regulated markets.
    Markets,
}

/// Arguments for the `search` and `resolve` commands.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Name or free-text query.
    pub query: String,

    /// Resource type: firm, individual or fund.
    #[arg(long = "type", default_value = "firm")]
    pub resource_type: String,
}

/// Arguments for the detail commands.
#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Reference number of the resource.
    pub reference: String,

    /// Detail action, e.g. names, permissions, passports.
    #[arg(long, default_value = "details")]
    pub action: String,

    /// Extra path token for `requirement-investment-types` (requirement
    /// reference) and `passport-permissions` (country).
    #[arg(long)]
    pub token: Option<String>,
}
