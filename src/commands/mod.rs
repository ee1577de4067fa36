use schemaform::defaults::{self, Defaults};
use schemaform::messages::Locale;
use schemaform::schema::Schema;
use schemaform::utils::io;

pub mod ask;
pub mod error;
pub mod inspect;

pub type CmdResult<T> = schemaform::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub locale: Option<String>,
}

/// Load a schema from inline JSON, `@file`, or `-` for stdin.
pub(crate) fn load_schema(spec: &str) -> schemaform::Result<Schema> {
    let content = io::read_spec(spec)?;
    Schema::from_json(&content)
}

/// Defaults from schemaform.json with the CLI locale applied on top.
pub(crate) fn resolve_defaults(global: &GlobalArgs) -> schemaform::Result<Defaults> {
    let mut defaults = defaults::load_defaults();
    if let Some(locale) = global.locale.as_deref() {
        defaults.locale = locale.parse::<Locale>()?;
    }
    Ok(defaults)
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (schemaform::Result<serde_json::Value>, i32) {
    match command {
        // Commands without global context
        crate::Commands::Error(args) => dispatch!(args, error),

        // Commands with global context
        crate::Commands::Ask(args) => dispatch!(args, global, ask),
        crate::Commands::Inspect(args) => dispatch!(args, global, inspect),

        // Handled in main before dispatch
        crate::Commands::List => {
            let err = schemaform::Error::validation_invalid_argument(
                "output_mode",
                "List command uses raw output mode",
                None,
                None,
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}
