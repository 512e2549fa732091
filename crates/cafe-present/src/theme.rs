//! Visual themes
//!
//! Both themes render the same state; they differ in classes and wording.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theatre look
    #[default]
    Classic,
    /// Film-noir "evidence room" look
    Noir,
}

/// FAQ accordion behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionMode {
    /// Opening one entry closes the others
    Exclusive,
    /// Entries toggle independently
    Independent,
}

impl Theme {
    /// Theme name as used in configuration
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Noir => "noir",
        }
    }

    /// Sidebar message for an empty cart
    #[must_use]
    pub fn sidebar_empty(self) -> &'static str {
        match self {
            Theme::Classic => "尚未選購任何商品",
            Theme::Noir => "尚無沒收證物",
        }
    }

    /// Order-form summary message for an empty cart
    #[must_use]
    pub fn summary_empty(self) -> &'static str {
        match self {
            Theme::Classic => "請先點選商品加入選購",
            Theme::Noir => "請先選擇嫌疑人",
        }
    }

    /// Label of the add-to-cart control
    #[must_use]
    pub fn add_label(self) -> &'static str {
        match self {
            Theme::Classic => "加入選購",
            Theme::Noir => "沒收證物",
        }
    }

    /// Label of the submit button while idle
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        "確認訂購"
    }

    /// Label of the submit button while submitting
    #[must_use]
    pub fn submitting_label(self) -> &'static str {
        "處理中..."
    }

    /// FAQ accordion behavior
    #[must_use]
    pub fn accordion_mode(self) -> AccordionMode {
        match self {
            Theme::Classic => AccordionMode::Exclusive,
            Theme::Noir => AccordionMode::Independent,
        }
    }

    /// Whether adding a product opens the cart sidebar
    #[must_use]
    pub fn opens_sidebar_on_add(self) -> bool {
        matches!(self, Theme::Noir)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: '{0}' (expected 'classic' or 'noir')")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Theme::Classic),
            "noir" => Ok(Theme::Noir),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}
