use clap::Parser;
use std::process;

use weekgrid::cli;
use weekgrid::cli::commands::{Cli, Commands};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let exit_code = match cli_args.command {
        Commands::Render { file, out } => {
            cli::render::run(file.as_deref(), out.as_deref(), json_output)
        }
        Commands::List { file } => cli::list::run(&file, json_output),
        Commands::Export { file } => cli::export::run(&file, json_output),
    };

    process::exit(exit_code);
}
