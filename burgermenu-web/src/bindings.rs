use std::cell::RefCell;

use burgermenu::{
    MenuBinding, MenuConfig, MenuError, MenuResult, Visibility,
};
use log::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::dom::DomHost;

thread_local! {
    static BINDING: RefCell<Option<MenuBinding<DomHost>>> =
        const { RefCell::new(None) };
}

fn init_runtime(level: log::Level) {
    console_error_panic_hook::set_once();
    // first call wins, later calls only adjust the level
    _ = console_log::init_with_level(level);
    log::set_max_level(level.to_level_filter());
}

fn with_binding<T>(
    f: impl FnOnce(&MenuBinding<DomHost>) -> MenuResult<T>,
) -> MenuResult<T> {
    BINDING.with(|slot| match slot.borrow().as_ref() {
        Some(binding) => f(binding),
        None => Err(MenuError::NotInstalled),
    })
}

/// Install the menu binding on the current document, replacing any
/// previously installed one.
pub fn install(config: MenuConfig) -> MenuResult<()> {
    config.validate()?;
    init_runtime(config.level()?);

    // a failed install leaves the current binding in place
    let binding = MenuBinding::install(DomHost::from_window()?, config)?;
    let previous = BINDING.with(|slot| slot.borrow_mut().replace(binding));
    if previous.is_some() {
        warn!("Replaced installed menu binding");
    }
    drop(previous);
    Ok(())
}

/// Remove the installed binding and its listeners. Returns false when
/// nothing was installed.
pub fn uninstall() -> bool {
    // dropped outside of the borrow
    let previous = BINDING.with(|slot| slot.borrow_mut().take());
    previous.is_some()
}

pub fn is_installed() -> bool {
    BINDING.with(|slot| slot.borrow().is_some())
}

/// Toggle via the installed binding, or look the menu up with the default
/// selectors when none is installed.
pub fn toggle() -> MenuResult<Visibility> {
    match with_binding(|binding| binding.toggle()) {
        Err(MenuError::NotInstalled) => {
            debug!("No binding installed, toggling by lookup");
            burgermenu::toggle_menu(
                &DomHost::from_window()?,
                &MenuConfig::default(),
            )
        }
        result => result,
    }
}

pub fn close() -> MenuResult<()> {
    with_binding(|binding| binding.close())
}

pub fn visibility() -> MenuResult<Visibility> {
    match with_binding(|binding| Ok(binding.visibility())) {
        Err(MenuError::NotInstalled) => burgermenu::menu_visibility(
            &DomHost::from_window()?,
            &MenuConfig::default(),
        ),
        result => result,
    }
}

/// Runs when the module is instantiated, so `toggleMenu()` calls made
/// before `initMenu()` already log and report panics.
#[wasm_bindgen(start)]
pub fn start() {
    init_runtime(log::Level::Debug);
}

/// `initMenu(configJson?)`: install the menu binding. The optional argument
/// is a JSON document with any subset of the config fields.
#[wasm_bindgen(js_name = initMenu)]
pub fn init_menu(config_json: Option<String>) -> Result<(), JsError> {
    let config = match config_json {
        Some(json) => MenuConfig::from_json(&json)?,
        None => MenuConfig::default(),
    };
    Ok(install(config)?)
}

/// `toggleMenu()`: returns true when the menu is visible afterwards.
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() -> Result<bool, JsError> {
    Ok(toggle()?.is_visible())
}

#[wasm_bindgen(js_name = closeMenu)]
pub fn close_menu() -> Result<(), JsError> {
    Ok(close()?)
}

#[wasm_bindgen(js_name = isMenuVisible)]
pub fn is_menu_visible() -> Result<bool, JsError> {
    Ok(visibility()?.is_visible())
}

#[wasm_bindgen(js_name = teardownMenu)]
pub fn teardown_menu() -> bool {
    uninstall()
}
