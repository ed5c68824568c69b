//! specwise - specification-driven product comparison CLI

use clap::Parser;

use specwise::cli::{Cli, Commands};
use specwise::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Research {
            product_type,
            use_case,
        } => commands::cmd_research(&product_type, &use_case),

        Commands::Analyze { files } => commands::cmd_analyze(&files),

        Commands::Add { brand, specs } => commands::cmd_add(&brand, &specs),

        Commands::Show => commands::cmd_show(),
        Commands::Recommend => commands::cmd_recommend(),

        Commands::Export { output, tsv } => commands::cmd_export(output, tsv),
        Commands::Reset => commands::cmd_reset(),
    }
}
