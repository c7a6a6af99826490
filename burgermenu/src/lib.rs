pub(crate) mod binding;
pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod host;
pub(crate) mod visibility;

pub mod page;

pub use binding::MenuBinding;
pub use config::{
    MenuConfig, DEFAULT_HIDDEN_DISPLAY, DEFAULT_MENU_SELECTOR,
    DEFAULT_TOGGLE_SELECTOR, DEFAULT_VISIBLE_DISPLAY,
};
pub use controller::{
    dismiss_on_outside_click, menu_visibility, toggle_menu,
    MenuToggleController,
};
pub use error::{ElementRole, MenuError, MenuResult};
pub use host::{ClickHandler, ClickSource, MenuHost};
pub use visibility::Visibility;
