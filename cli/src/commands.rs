pub mod device;
pub mod discount;
pub mod fly;
pub mod invoice;
pub mod notify;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use solid_common::bird::BirdKind;
use solid_common::device::DeviceKind;
use solid_common::discount::CustomerTier;
use solid_common::messaging::Channel;

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "Capability contracts and strategies, one SOLID principle at a time.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q warnings only, -qq errors only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a notification through an injected sender
    #[command(alias = "n")]
    Notify {
        #[arg(short, long, default_value = "email")]
        channel: Channel,
        message: String,
    },
    /// Use one capability of a device
    #[command(alias = "d")]
    Device {
        kind: DeviceKind,
        #[arg(value_enum)]
        action: DeviceAction,
        content: String,
    },
    /// Compute the discount for a customer tier
    Discount {
        #[arg(short, long, default_value = "standard")]
        tier: CustomerTier,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        amount: f64,
    },
    /// Summarize an invoice, optionally saving and emailing it
    #[command(alias = "i")]
    Invoice {
        customer: String,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        amount: f64,
        /// Write the summary to this file
        #[arg(long)]
        save: Option<PathBuf>,
        /// Email the summary to this recipient
        #[arg(long)]
        email: Option<String>,
    },
    /// Ask a bird to fly
    Fly { bird: BirdKind },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DeviceAction {
    Print,
    Scan,
    Fax,
}

/// Accepts any finite number, negative ones included.
fn parse_amount(s: &str) -> Result<f64, String> {
    let amount: f64 = s.parse().map_err(|e| format!("invalid amount '{s}': {e}"))?;
    if !amount.is_finite() {
        return Err(format!("amount must be a finite number, got '{s}'"));
    }
    Ok(amount)
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
