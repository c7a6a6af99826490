use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

pub const DEFAULT_MENU_SELECTOR: &str = ".burger-menu";
pub const DEFAULT_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const DEFAULT_VISIBLE_DISPLAY: &str = "flex";
pub const DEFAULT_HIDDEN_DISPLAY: &str = "none";
const DEFAULT_LOG_LEVEL: &str = "debug";

/// Where to find the menu, and which display values encode its state.
///
/// Every field has a default, so a partial document such as
/// `{"menu_selector": "#nav"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    pub menu_selector: String,
    pub toggle_selector: String,
    pub visible_display: String,
    pub hidden_display: String,
    /// Subscribe to clicks on the toggle control directly, instead of
    /// relying on markup (`onclick="toggleMenu()"`) to do so.
    pub bind_toggle: bool,
    pub log_level: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            menu_selector: DEFAULT_MENU_SELECTOR.to_string(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_string(),
            visible_display: DEFAULT_VISIBLE_DISPLAY.to_string(),
            hidden_display: DEFAULT_HIDDEN_DISPLAY.to_string(),
            bind_toggle: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> MenuResult<Self> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> MenuResult<Self> {
        let config: MenuConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MenuResult<()> {
        if self.menu_selector.trim().is_empty() {
            return Err(MenuError::Config(
                "menu_selector must not be empty".to_string(),
            ));
        }
        if self.toggle_selector.trim().is_empty() {
            return Err(MenuError::Config(
                "toggle_selector must not be empty".to_string(),
            ));
        }
        if self.visible_display.is_empty() || self.hidden_display.is_empty()
        {
            return Err(MenuError::Config(
                "display values must not be empty".to_string(),
            ));
        }
        if self.visible_display == self.hidden_display {
            return Err(MenuError::Config(format!(
                "visible and hidden display are both \"{}\"",
                self.visible_display
            )));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> MenuResult<log::Level> {
        log::Level::from_str(&self.log_level).map_err(|_| {
            MenuError::Config(format!("Unknown log level: {}", self.log_level))
        })
    }
}
