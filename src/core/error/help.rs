use super::{codes, ErrorCode, Hint};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelpSummary {
    pub code: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelp {
    pub code: String,
    pub summary: String,
    pub details_schema: serde_json::Value,
    pub hints: Vec<Hint>,
}

pub fn list() -> Vec<ErrorHelpSummary> {
    codes::all_codes()
        .iter()
        .copied()
        .map(|code| {
            let help = explain(code);
            ErrorHelpSummary {
                code: help.code,
                summary: help.summary,
            }
        })
        .collect()
}

pub fn explain(code: ErrorCode) -> ErrorHelp {
    match code {
        ErrorCode::ConfigInvalidJson => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Configuration JSON is invalid".to_string(),
            details_schema: serde_json::json!({"path":"string","error":"string"}),
            hints: vec![Hint {
                message: "Fix JSON syntax in schemaform.json".to_string(),
            }],
        },
        ErrorCode::ValidationInvalidArgument => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Invalid argument or answer".to_string(),
            details_schema: serde_json::json!({"field":"string","problem":"string","id":"string?","tried":"string[]?"}),
            hints: vec![Hint {
                message: "Verify the value and try again".to_string(),
            }],
        },
        ErrorCode::ValidationInvalidJson => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Invalid JSON input".to_string(),
            details_schema: serde_json::json!({"error":"string","context":"string?"}),
            hints: vec![Hint {
                message: "Validate the schema JSON you passed to the command".to_string(),
            }],
        },
        ErrorCode::ValidationUnknownErrorCode => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Unknown error code".to_string(),
            details_schema: serde_json::json!({"code":"string"}),
            hints: vec![Hint {
                message: "Run `schemaform error list` to list available codes".to_string(),
            }],
        },
        ErrorCode::SchemaUnknownType => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Schema property has an unsupported type".to_string(),
            details_schema: serde_json::json!({"key":"string","type":"string","supported":"string[]"}),
            hints: vec![Hint {
                message: "Set `type` to string, number, password, boolean or list, or mark the property `disable`".to_string(),
            }],
        },
        ErrorCode::SchemaInvalidPattern => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Schema property regExp does not compile".to_string(),
            details_schema: serde_json::json!({"key":"string","pattern":"string","error":"string"}),
            hints: vec![Hint {
                message: "Fix the regular expression in the property's `regExp`".to_string(),
            }],
        },
        ErrorCode::PromptAborted => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Input closed before a question was answered".to_string(),
            details_schema: serde_json::json!({"key":"string"}),
            hints: vec![Hint {
                message: "Run interactively, or pass --yes to accept defaults".to_string(),
            }],
        },
        ErrorCode::InternalIoError => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Internal IO error".to_string(),
            details_schema: serde_json::json!({"error":"string","context":"string?"}),
            hints: vec![Hint {
                message: "Report as a schemaform bug if persistent".to_string(),
            }],
        },
        ErrorCode::InternalJsonError => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Internal JSON error".to_string(),
            details_schema: serde_json::json!({"error":"string","context":"string?"}),
            hints: vec![Hint {
                message: "Report as a schemaform bug if persistent".to_string(),
            }],
        },
        ErrorCode::InternalUnexpected => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Unexpected internal error".to_string(),
            details_schema: serde_json::json!({}),
            hints: vec![Hint {
                message: "Report as a schemaform bug with steps to reproduce".to_string(),
            }],
        },
    }
}
