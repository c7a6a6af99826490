use std::error::Error;
use std::fmt;

/// The two structural elements the menu logic depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Menu,
    Toggle,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRole::Menu => write!(f, "burger menu"),
            ElementRole::Toggle => write!(f, "menu toggle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    MissingElement { role: ElementRole, selector: String },
    Selector(String),
    Config(String),
    Host(String),
    NotInstalled,
}

pub type MenuResult<T> = Result<T, MenuError>;

impl MenuError {
    pub fn missing(role: ElementRole, selector: &str) -> Self {
        MenuError::MissingElement {
            role,
            selector: selector.to_string(),
        }
    }
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::MissingElement { role, selector } => write!(
                f,
                "Missing element: no {} matches selector \"{}\"",
                role, selector
            ),
            MenuError::Selector(s) => write!(f, "Selector error: {}", s),
            MenuError::Config(s) => write!(f, "Config error: {}", s),
            MenuError::Host(s) => write!(f, "Host error: {}", s),
            MenuError::NotInstalled => {
                write!(f, "No menu binding is installed")
            }
        }
    }
}

impl Error for MenuError {}

impl From<serde_json::Error> for MenuError {
    fn from(error: serde_json::Error) -> Self {
        MenuError::Config(error.to_string())
    }
}

impl From<serde_yaml::Error> for MenuError {
    fn from(error: serde_yaml::Error) -> Self {
        MenuError::Config(error.to_string())
    }
}
