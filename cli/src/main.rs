mod commands;
mod terminal;

use commands::{CommandLine, Commands, device, discount, fly, invoice, notify};
use solid_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };
    logging::init_logging(&cfg);

    match commands.command {
        Commands::Notify { channel, message } => {
            print::header("notification", cfg.quiet);
            notify::notify(channel, &message)
        }
        Commands::Device {
            kind,
            action,
            content,
        } => {
            print::header("device", cfg.quiet);
            device::device(kind, action, &content)
        }
        Commands::Discount { tier, amount } => {
            print::header("discount", cfg.quiet);
            discount::discount(tier, amount)
        }
        Commands::Invoice {
            customer,
            amount,
            save,
            email,
        } => {
            print::header("invoice", cfg.quiet);
            invoice::invoice(&customer, amount, save.as_deref(), email.as_deref())
        }
        Commands::Fly { bird } => {
            print::header("flight", cfg.quiet);
            fly::fly(bird)
        }
    }
}
