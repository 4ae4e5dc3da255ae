//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bitpapa Pay command-line client
///
/// Queries and manages invoices, deposit addresses and transactions
/// through the Bitpapa Pay API and prints the responses as JSON.
#[derive(Debug, Parser)]
#[command(name = "bitpapa-pay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Merchant access token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API origin
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// User-Agent header override
    #[arg(long = "user-agent", global = true)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for bitpapa-pay
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },

    /// Show all exchange rates
    Rates,

    /// Show withdrawal fees
    Fees {
        /// Only this currency
        #[arg(long)]
        currency: Option<String>,
        /// Only this network
        #[arg(long)]
        network: Option<String>,
    },

    /// List deposit addresses
    Addresses {
        /// Only addresses of this currency
        #[arg(long)]
        currency: Option<String>,
        /// Only addresses with this label
        #[arg(long)]
        label: Option<String>,
    },

    /// Create a deposit address
    CreateAddress {
        /// Currency ticker, e.g. USDT
        currency: String,
        /// Blockchain network, e.g. TRC20
        network: String,
        /// Free-form label
        #[arg(long)]
        label: Option<String>,
    },

    /// List transactions, optionally of a single address
    Transactions {
        /// Address id
        #[arg(long)]
        address: Option<String>,
    },

    /// List invoices
    Invoices {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
        /// Invoices per page
        #[arg(long = "per-page")]
        per_page: Option<u32>,
    },

    /// Issue an invoice priced in crypto
    CreateInvoice {
        /// Amount to be paid
        amount: f64,
        /// Currency ticker, e.g. USDT
        currency: String,
        /// Merchant's own reference for the invoice
        #[arg(long = "merchant-invoice-id")]
        merchant_invoice_id: Option<String>,
        /// Invoice description
        #[arg(long)]
        description: Option<String>,
    },

    /// List invoices of the legacy public flow
    PublicInvoices,
}

impl Command {
    /// Returns true if the command calls an endpoint that needs a token.
    #[must_use]
    pub const fn requires_token(&self) -> bool {
        !matches!(self, Self::Init { .. } | Self::Rates)
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
