//! Prompt executors: the boundary where a [`Question`] becomes an answer.

use serde_json::Value;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{Error, Result};
use crate::question::{Question, QuestionKind, Validator};
use crate::schema::value_text;

/// Presents one question and returns its single resolved answer.
///
/// Executors own the retry loop: an answer rejected by the question's
/// validator is asked again rather than returned.
pub trait PromptExecutor {
    fn ask(&mut self, question: &Question) -> Result<Value>;
}

/// Line-based terminal prompt engine.
/// Prompts go to the output stream (stderr by default) so stdout stays clean for JSON.
pub struct PromptEngine {
    interactive: bool,
    /// Streams are the process stdin/stderr, so masked input can go through the terminal.
    terminal: bool,
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl PromptEngine {
    /// Create engine with automatic TTY detection.
    pub fn new() -> Self {
        Self::with_interactive(io::stdin().is_terminal() && io::stderr().is_terminal())
    }

    /// Create engine with explicit interactive mode.
    pub fn with_interactive(interactive: bool) -> Self {
        Self {
            interactive,
            terminal: true,
            input: Box::new(io::BufReader::new(io::stdin())),
            output: Box::new(io::stderr()),
        }
    }

    /// Force non-interactive mode (every question takes its default).
    pub fn non_interactive() -> Self {
        Self::with_interactive(false)
    }

    /// Interactive engine over arbitrary streams.
    pub fn with_io(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            interactive: true,
            terminal: false,
            input,
            output,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_line(&mut self, key: &str) -> Result<String> {
        self.output.flush().ok();

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read answer".to_string())))?;
        if read == 0 {
            return Err(Error::prompt_aborted(key));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) {
        writeln!(self.output, "{}", text).ok();
    }

    /// Masked answers are read without echo on a real terminal. The default of a
    /// masked question is never shown.
    fn read_secret(&mut self, question: &Question) -> Result<String> {
        if !self.terminal {
            write!(self.output, "{}", question.message).ok();
            return self.read_line(&question.name);
        }

        dialoguer::Password::new()
            .with_prompt(question.message.trim_end().trim_end_matches(':'))
            .allow_empty_password(true)
            .interact()
            .map(|secret| secret.trim().to_string())
            .map_err(|e| Error::prompt_aborted(question.name.as_str()).with_hint(e.to_string()))
    }

    fn input(
        &mut self,
        question: &Question,
        masked: bool,
        default: Option<&Value>,
        validator: &Validator,
    ) -> Result<Value> {
        loop {
            let line = if masked {
                self.read_secret(question)?
            } else {
                let prompt = match default {
                    Some(d) => format!("{}({}) ", question.message, value_text(d)),
                    None => question.message.clone(),
                };
                write!(self.output, "{}", prompt).ok();
                self.read_line(&question.name)?
            };
            let answer = match (line.is_empty(), default) {
                (true, Some(d)) => d.clone(),
                _ => Value::String(line),
            };

            match validator.check(&value_text(&answer)) {
                Ok(()) => return Ok(answer),
                Err(message) => self.say(&format!(">> {}", message)),
            }
        }
    }

    fn confirm(&mut self, question: &Question, default: bool) -> Result<Value> {
        let suffix = if default { "[Y/n]" } else { "[y/N]" };
        write!(self.output, "{} {}: ", question.message, suffix).ok();

        let trimmed = self.read_line(&question.name)?.to_lowercase();
        if trimmed.is_empty() {
            return Ok(Value::Bool(default));
        }
        Ok(Value::Bool(trimmed.starts_with('y')))
    }

    /// Print choices from `start` up to one page; returns how many are now shown.
    fn show_page(
        &mut self,
        choices: &[crate::choices::Choice],
        default: Option<&Value>,
        start: usize,
        page_size: usize,
    ) -> usize {
        let end = (start + page_size).min(choices.len());
        for (i, choice) in choices.iter().enumerate().take(end).skip(start) {
            let marker = if Some(&choice.value) == default { "*" } else { " " };
            self.say(&format!("  {}[{}] {}", marker, i + 1, choice.name));
        }
        end
    }

    fn select(
        &mut self,
        question: &Question,
        choices: &[crate::choices::Choice],
        default: Option<&Value>,
        allow_multiple: bool,
        page_size: usize,
    ) -> Result<Value> {
        self.say(&question.message);
        if choices.is_empty() {
            self.say("  (no choices available)");
            return Ok(empty_selection(allow_multiple));
        }

        // Only numbers already printed can be entered; `n` prints the next page.
        let page_size = page_size.max(1);
        let mut shown = self.show_page(choices, default, 0, page_size);

        loop {
            let more = if shown < choices.len() { ", n for more" } else { "" };
            if allow_multiple {
                write!(self.output, "Enter choices (e.g. 1,3{}): ", more).ok();
            } else {
                write!(self.output, "Enter choice (1-{}{}): ", shown, more).ok();
            }

            let line = self.read_line(&question.name)?;
            if line.is_empty() {
                return Ok(default_selection(default, allow_multiple));
            }
            if line.eq_ignore_ascii_case("n") && shown < choices.len() {
                shown = self.show_page(choices, default, shown, page_size);
                continue;
            }

            match parse_selection(&line, shown, allow_multiple) {
                Some(indices) => {
                    let mut picked: Vec<Value> =
                        indices.into_iter().map(|i| choices[i].value.clone()).collect();
                    if allow_multiple {
                        return Ok(Value::Array(picked));
                    }
                    return Ok(picked.pop().unwrap_or(Value::Null));
                }
                None => self.say(&format!(">> Enter a number between 1 and {}", shown)),
            }
        }
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptExecutor for PromptEngine {
    fn ask(&mut self, question: &Question) -> Result<Value> {
        if !self.interactive {
            return default_answer(question);
        }

        match &question.kind {
            QuestionKind::Input {
                masked,
                default,
                validator,
            } => self.input(question, *masked, default.as_ref(), validator),
            QuestionKind::Confirm { default } => self.confirm(question, *default),
            QuestionKind::Select {
                choices,
                default,
                allow_multiple,
                page_size,
            } => self.select(
                question,
                choices,
                default.as_ref(),
                *allow_multiple,
                *page_size,
            ),
        }
    }
}

/// The answer a question takes when nobody is there to type one.
///
/// Input defaults still go through the validator; a default that fails it
/// is an error since there is no way to ask again.
pub fn default_answer(question: &Question) -> Result<Value> {
    match &question.kind {
        QuestionKind::Input {
            default, validator, ..
        } => {
            let answer = default
                .clone()
                .unwrap_or_else(|| Value::String(String::new()));
            validator.check(&value_text(&answer)).map_err(|message| {
                Error::validation_invalid_argument(
                    question.name.as_str(),
                    message,
                    None,
                    Some(vec![value_text(&answer)]),
                )
            })?;
            Ok(answer)
        }
        QuestionKind::Confirm { default } => Ok(Value::Bool(*default)),
        QuestionKind::Select {
            default,
            allow_multiple,
            ..
        } => Ok(default_selection(default.as_ref(), *allow_multiple)),
    }
}

fn default_selection(default: Option<&Value>, allow_multiple: bool) -> Value {
    match (default, allow_multiple) {
        (Some(d), true) => Value::Array(vec![d.clone()]),
        (Some(d), false) => d.clone(),
        (None, _) => empty_selection(allow_multiple),
    }
}

fn empty_selection(allow_multiple: bool) -> Value {
    if allow_multiple {
        Value::Array(Vec::new())
    } else {
        Value::Null
    }
}

/// Parse 1-based selections into 0-based indices. Single-select accepts exactly one.
fn parse_selection(line: &str, len: usize, allow_multiple: bool) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    for part in line.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let n = part.parse::<usize>().ok()?;
        if n == 0 || n > len {
            return None;
        }
        if !indices.contains(&(n - 1)) {
            indices.push(n - 1);
        }
    }

    if indices.is_empty() || (!allow_multiple && indices.len() > 1) {
        return None;
    }
    Some(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Choice;
    use serde_json::json;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    /// Output sink the test can read back after the engine is done with it.
    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    fn captured_engine(input: &str) -> (PromptEngine, Captured) {
        let out = Captured::default();
        let engine = PromptEngine::with_io(
            Box::new(Cursor::new(input.as_bytes().to_vec())),
            Box::new(out.clone()),
        );
        (engine, out)
    }

    fn engine(input: &str) -> PromptEngine {
        PromptEngine::with_io(
            Box::new(Cursor::new(input.as_bytes().to_vec())),
            Box::new(io::sink()),
        )
    }

    fn input_question(default: Option<Value>, validator: Validator) -> Question {
        Question {
            name: "name".to_string(),
            message: "Please enter name: ".to_string(),
            kind: QuestionKind::Input {
                masked: false,
                default,
                validator,
            },
        }
    }

    fn select_question(allow_multiple: bool) -> Question {
        let choices = ["vue", "san", "react"]
            .iter()
            .map(|v| Choice {
                value: json!(v),
                name: v.to_uppercase(),
                short: v.to_string(),
            })
            .collect();
        Question {
            name: "tpl".to_string(),
            message: "Choose one template: ".to_string(),
            kind: QuestionKind::Select {
                choices,
                default: Some(json!("vue")),
                allow_multiple,
                page_size: 1000,
            },
        }
    }

    fn lowercase_only() -> Validator {
        Validator::Pattern {
            regex: regex::Regex::new("^[a-z]+$").unwrap(),
            message: "Invalid input".to_string(),
        }
    }

    #[test]
    fn input_reprompts_until_valid() {
        let mut engine = engine("Bad1\nstill bad\ngood\n");
        let answer = engine.ask(&input_question(None, lowercase_only())).unwrap();
        assert_eq!(answer, json!("good"));
    }

    #[test]
    fn empty_input_takes_default() {
        let mut engine = engine("\n");
        let answer = engine
            .ask(&input_question(Some(json!("demo")), Validator::AcceptAll))
            .unwrap();
        assert_eq!(answer, json!("demo"));
    }

    #[test]
    fn closed_input_aborts() {
        let mut engine = engine("");
        let err = engine
            .ask(&input_question(None, Validator::AcceptAll))
            .unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::PromptAborted);
    }

    #[test]
    fn confirm_reads_yes_and_default() {
        let question = Question {
            name: "ts".to_string(),
            message: "use typescript?".to_string(),
            kind: QuestionKind::Confirm { default: false },
        };

        assert_eq!(engine("y\n").ask(&question).unwrap(), json!(true));
        assert_eq!(engine("\n").ask(&question).unwrap(), json!(false));
        assert_eq!(engine("nope\n").ask(&question).unwrap(), json!(false));
    }

    #[test]
    fn select_returns_chosen_value() {
        let answer = engine("2\n").ask(&select_question(false)).unwrap();
        assert_eq!(answer, json!("san"));
    }

    #[test]
    fn select_retries_out_of_range() {
        let answer = engine("9\n1,2\n3\n").ask(&select_question(false)).unwrap();
        assert_eq!(answer, json!("react"));
    }

    #[test]
    fn select_empty_line_takes_default() {
        assert_eq!(engine("\n").ask(&select_question(false)).unwrap(), json!("vue"));
        assert_eq!(
            engine("\n").ask(&select_question(true)).unwrap(),
            json!(["vue"])
        );
    }

    #[test]
    fn multi_select_returns_array_in_entry_order() {
        let answer = engine("3, 1\n").ask(&select_question(true)).unwrap();
        assert_eq!(answer, json!(["react", "vue"]));
    }

    #[test]
    fn select_without_choices_answers_null() {
        let question = Question {
            name: "city".to_string(),
            message: "Choose one city: ".to_string(),
            kind: QuestionKind::Select {
                choices: Vec::new(),
                default: None,
                allow_multiple: false,
                page_size: 1000,
            },
        };
        assert_eq!(engine("").ask(&question).unwrap(), Value::Null);
    }

    #[test]
    fn non_interactive_uses_defaults() {
        let mut engine = PromptEngine::non_interactive();
        assert!(!engine.is_interactive());
        assert_eq!(
            engine
                .ask(&input_question(Some(json!("demo")), Validator::AcceptAll))
                .unwrap(),
            json!("demo")
        );
        assert_eq!(engine.ask(&select_question(false)).unwrap(), json!("vue"));
    }

    #[test]
    fn non_interactive_rejects_invalid_default() {
        let err = default_answer(&input_question(Some(json!("Bad1")), lowercase_only())).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["field"], "name");
    }

    #[test]
    fn masked_input_never_shows_its_default() {
        let question = Question {
            name: "token".to_string(),
            message: "Please enter token: ".to_string(),
            kind: QuestionKind::Input {
                masked: true,
                default: Some(json!("s3cret")),
                validator: Validator::AcceptAll,
            },
        };
        let (mut engine, out) = captured_engine("\n");

        assert_eq!(engine.ask(&question).unwrap(), json!("s3cret"));
        assert_eq!(out.text(), "Please enter token: ");
    }

    #[test]
    fn select_only_accepts_numbers_already_shown() {
        let question = Question {
            name: "tpl".to_string(),
            message: "Choose one template: ".to_string(),
            kind: QuestionKind::Select {
                choices: ["a", "b", "c"]
                    .iter()
                    .map(|v| Choice {
                        value: json!(v),
                        name: v.to_uppercase(),
                        short: v.to_string(),
                    })
                    .collect(),
                default: Some(json!("a")),
                allow_multiple: false,
                page_size: 2,
            },
        };
        let (mut engine, out) = captured_engine("3\nn\n3\n");

        assert_eq!(engine.ask(&question).unwrap(), json!("c"));

        let text = out.text();
        let first_page = text.split(">> ").next().unwrap();
        assert!(first_page.contains("[2] B"));
        assert!(!first_page.contains("[3] C"));
        assert!(first_page.contains("Enter choice (1-2, n for more): "));
        assert!(text.contains("   [3] C\nEnter choice (1-3): "));
    }

    #[test]
    fn parse_selection_rules() {
        assert_eq!(parse_selection("2", 3, false), Some(vec![1]));
        assert_eq!(parse_selection("1,1,2", 3, true), Some(vec![0, 1]));
        assert_eq!(parse_selection("0", 3, false), None);
        assert_eq!(parse_selection("1,2", 3, false), None);
        assert_eq!(parse_selection("x", 3, true), None);
    }
}
