mod cli;
mod convert_cmd;
mod inspect_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Convert {
            ref input,
            ref output,
            shadow_tolerance,
            quiet,
        } => convert_cmd::run(input, output, shadow_tolerance, quiet),
        cli::Commands::Inspect { ref input } => inspect_cmd::run(input),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
