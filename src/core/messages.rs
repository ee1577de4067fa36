//! Localized prompt text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn input_message(&self, name: &str) -> String {
        match self {
            Locale::En => format!("Please enter {}: ", name),
            Locale::Zh => format!("请输入{}: ", name),
        }
    }

    pub fn confirm_message(&self, name: &str) -> String {
        match self {
            Locale::En => format!("{}?", name),
            Locale::Zh => format!("{}? :", name),
        }
    }

    pub fn select_message(&self, name: &str) -> String {
        match self {
            Locale::En => format!("Choose one {}: ", name),
            Locale::Zh => format!("选择一个{}: ", name),
        }
    }

    pub fn invalid_input(&self) -> &'static str {
        match self {
            Locale::En => "Invalid input",
            Locale::Zh => "输入不符合规范",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            "zh" | "zh-cn" | "zh_cn" => Ok(Locale::Zh),
            _ => Err(Error::validation_invalid_argument(
                "locale",
                format!("Unsupported locale '{}'", s),
                None,
                Some(vec!["en".to_string(), "zh".to_string()]),
            )),
        }
    }
}
