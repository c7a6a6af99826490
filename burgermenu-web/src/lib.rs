mod bindings;
mod dom;
mod listener;

pub use bindings::{
    close, close_menu, init_menu, install, is_installed, is_menu_visible,
    start, teardown_menu, toggle, toggle_menu, uninstall, visibility,
};
pub use dom::DomHost;
pub use listener::ClickListener;
