use std::fmt;

use crate::config::MenuConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Binary classification of a raw display value: only the configured
    /// visible value counts as `Visible`. Anything else, including an empty
    /// inline style or a stylesheet value such as `block`, is `Hidden`.
    pub fn classify(display: &str, config: &MenuConfig) -> Self {
        if display == config.visible_display {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    pub fn display_value(self, config: &MenuConfig) -> &str {
        match self {
            Visibility::Visible => &config.visible_display,
            Visibility::Hidden => &config.hidden_display,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Visible => write!(f, "visible"),
            Visibility::Hidden => write!(f, "hidden"),
        }
    }
}
