//! OhmCode - Resistor color-band calculator for the terminal
//!
//! This binary exposes the codec as headless subcommands: encode band colors
//! to a resistance, decode a target resistance to band colors, parse and
//! format resistance text, convert between 4- and 5-band layouts, and
//! inspect the color taxonomy.

use clap::{Parser, Subcommand};
use ohmcode::cli::{
    ColorsArgs, ConfigArgs, DecodeArgs, EncodeArgs, FormatArgs, ParseArgs, RelayoutArgs,
};

/// Resistor color-band calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the resistance encoded by band colors
    Encode(EncodeArgs),
    /// Find the band colors for a target resistance
    Decode(DecodeArgs),
    /// Parse a resistance string into ohms
    Parse(ParseArgs),
    /// Format a resistance in ohms as a human-readable string
    Format(FormatArgs),
    /// Convert a color sequence between 4- and 5-band layouts
    Relayout(RelayoutArgs),
    /// List the band color taxonomy
    Colors(ColorsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Encode(args) => args.execute(),
        Commands::Decode(args) => args.execute(),
        Commands::Parse(args) => args.execute(),
        Commands::Format(args) => args.execute(),
        Commands::Relayout(args) => args.execute(),
        Commands::Colors(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
