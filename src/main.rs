use clap::{CommandFactory, Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{ask, error, inspect};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "schemaform")]
#[command(version = VERSION)]
#[command(about = "Ask the questions described by a parameter schema and print the answers as JSON")]
struct Cli {
    /// Prompt language (en, zh). Overrides schemaform.json
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask every question in a schema and print the parameter map
    Ask(ask::AskArgs),
    /// Show the questions a schema produces, answered with defaults
    Inspect(inspect::InspectArgs),
    /// Explain error codes
    Error(error::ErrorArgs),
    /// List available commands (alias for --help)
    List,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::List) {
        let mut cmd = Cli::command();
        cmd.print_help().ok();
        println!();
        return std::process::ExitCode::SUCCESS;
    }

    let global = GlobalArgs { locale: cli.locale };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    output::print_json_result(json_result).ok();

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
