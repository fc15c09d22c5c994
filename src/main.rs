use clap::Parser;
use droidex::cli::{Cli, Commands};
use droidex::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Assets(args) => droidex::cli::assets::run(args, &printer)?,
        Commands::Icon(args) => droidex::cli::icon::run(args, &printer)?,
        Commands::List(args) => droidex::cli::list::run(args, &printer)?,
        Commands::Completions(args) => droidex::cli::completions::run(args)?,
    }

    Ok(())
}
