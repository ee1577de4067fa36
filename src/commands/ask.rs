use clap::Args;
use serde::Serialize;

use schemaform::form::{self, FormEnv, ParamMap};
use schemaform::prompt::PromptEngine;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct AskArgs {
    /// Schema JSON (inline, @file, or - for stdin)
    pub schema: String,

    /// Accept every default without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub command: &'static str,
    pub params: ParamMap,
}

pub fn run(args: AskArgs, global: &GlobalArgs) -> CmdResult<AskOutput> {
    let mut engine = if args.yes {
        PromptEngine::non_interactive()
    } else if crate::tty::require_tty_for_interactive() {
        PromptEngine::with_interactive(true)
    } else {
        return Err(schemaform::Error::validation_invalid_argument(
            "tty",
            "Interactive prompts require a TTY on stdin and stderr",
            None,
            None,
        )
        .with_hint("Pass --yes to answer every question with its default"));
    };

    let schema = super::load_schema(&args.schema)?;
    let env = FormEnv::local(super::resolve_defaults(global)?);

    crate::tty::status(&format!(
        "Asking {} question(s)",
        schema.enabled().count()
    ));
    let params = form::run(&schema, &env, &mut engine)?;

    Ok((
        AskOutput {
            command: "ask",
            params,
        },
        0,
    ))
}
