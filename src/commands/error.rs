use clap::{Args, Subcommand};
use serde::Serialize;

use schemaform::error::{codes, help};

use super::CmdResult;

#[derive(Args)]
pub struct ErrorArgs {
    #[command(subcommand)]
    command: ErrorCommand,
}

#[derive(Subcommand)]
enum ErrorCommand {
    /// List available error codes
    List,
    /// Explain an error code
    Explain {
        /// Error code (example: `schema.unknown_type`)
        code: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCodesOutput {
    pub command: String,
    pub codes: Vec<help::ErrorHelpSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExplainOutput {
    pub command: String,
    pub help: help::ErrorHelp,
}

pub fn run_json(args: ErrorArgs) -> CmdResult<serde_json::Value> {
    match args.command {
        ErrorCommand::List => {
            let output = ErrorCodesOutput {
                command: "error.list".to_string(),
                codes: help::list(),
            };
            let value = serde_json::to_value(output)
                .map_err(|e| schemaform::Error::internal_json(e.to_string(), None))?;
            Ok((value, 0))
        }
        ErrorCommand::Explain { code } => {
            let Some(code_enum) = codes::parse_code(&code) else {
                return Err(schemaform::Error::validation_unknown_error_code(code));
            };

            let output = ErrorExplainOutput {
                command: "error.explain".to_string(),
                help: help::explain(code_enum),
            };
            let value = serde_json::to_value(output)
                .map_err(|e| schemaform::Error::internal_json(e.to_string(), None))?;
            Ok((value, 0))
        }
    }
}
