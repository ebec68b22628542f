use clap::{Parser, Subcommand};

mod commands;
mod formatting;

use crate::commands::{ask_intent, print_orders, print_report, print_store_info};

#[derive(Parser, Debug)]
#[command(version = "0.1.0", about = "Try out the Shopify sales skill from the command line")]
pub struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the store settings the skill works from: money format and timezone
    Store,
    /// List the orders placed on a given day, in the store's timezone
    Orders {
        /// How many days back to look. 0 is today, 1 is yesterday, and so on.
        #[arg(short = 'd', long = "days-ago", default_value = "0")]
        days_ago: u32,
    },
    /// Print the answer to every question the skill knows about
    Report,
    /// Answer one intent, and print the Alexa response envelope
    Ask {
        /// The intent name, e.g. GrossSalesTodayIntent. Unknown names get the greeting.
        #[arg(required = true, index = 1)]
        intent: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Arguments::parse();
    let result = match cli.command {
        Command::Store => print_store_info().await,
        Command::Orders { days_ago } => print_orders(days_ago).await,
        Command::Report => print_report().await,
        Command::Ask { intent } => ask_intent(intent).await,
    };
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
