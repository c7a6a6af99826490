use log::debug;

use crate::config::MenuConfig;
use crate::error::{ElementRole, MenuError, MenuResult};
use crate::host::MenuHost;
use crate::visibility::Visibility;

fn lookup<H: MenuHost>(
    host: &H,
    role: ElementRole,
    selector: &str,
) -> MenuResult<H::Node> {
    host.query_selector(selector)?
        .ok_or_else(|| MenuError::missing(role, selector))
}

fn is_outside<H: MenuHost>(
    host: &H,
    menu: &H::Node,
    toggle: &H::Node,
    target: Option<&H::Node>,
) -> bool {
    match target {
        Some(target) => {
            !host.contains(menu, target) && !host.contains(toggle, target)
        }
        None => true,
    }
}

fn flip<H: MenuHost>(
    host: &H,
    menu: &H::Node,
    config: &MenuConfig,
) -> MenuResult<Visibility> {
    let current = Visibility::classify(&host.display(menu), config);
    let next = current.toggled();
    host.set_display(menu, next.display_value(config))?;
    debug!("Menu toggled: {} -> {}", current, next);
    Ok(next)
}

/// Toggle the menu, looking it up on every call.
pub fn toggle_menu<H: MenuHost>(
    host: &H,
    config: &MenuConfig,
) -> MenuResult<Visibility> {
    let menu = lookup(host, ElementRole::Menu, &config.menu_selector)?;
    flip(host, &menu, config)
}

/// Current visibility of the menu, looking it up on every call.
pub fn menu_visibility<H: MenuHost>(
    host: &H,
    config: &MenuConfig,
) -> MenuResult<Visibility> {
    let menu = lookup(host, ElementRole::Menu, &config.menu_selector)?;
    Ok(Visibility::classify(&host.display(&menu), config))
}

/// Hide the menu if `target` lies outside both the menu and its toggle
/// control. Returns true when the menu was hidden.
pub fn dismiss_on_outside_click<H: MenuHost>(
    host: &H,
    config: &MenuConfig,
    target: Option<&H::Node>,
) -> MenuResult<bool> {
    let menu = lookup(host, ElementRole::Menu, &config.menu_selector)?;
    let toggle = lookup(host, ElementRole::Toggle, &config.toggle_selector)?;
    if !is_outside(host, &menu, &toggle, target) {
        return Ok(false);
    }
    host.set_display(&menu, &config.hidden_display)?;
    Ok(true)
}

/// Menu logic bound to element handles resolved once, at attach time.
pub struct MenuToggleController<H: MenuHost> {
    host: H,
    config: MenuConfig,
    menu: H::Node,
    toggle: H::Node,
}

impl<H: MenuHost> MenuToggleController<H> {
    pub fn attach(host: H, config: MenuConfig) -> MenuResult<Self> {
        config.validate()?;
        let menu = lookup(&host, ElementRole::Menu, &config.menu_selector)?;
        let toggle =
            lookup(&host, ElementRole::Toggle, &config.toggle_selector)?;
        debug!(
            "Menu controller attached to \"{}\" / \"{}\"",
            config.menu_selector, config.toggle_selector
        );
        Ok(Self {
            host,
            config,
            menu,
            toggle,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn menu(&self) -> &H::Node {
        &self.menu
    }

    pub fn toggle_control(&self) -> &H::Node {
        &self.toggle
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::classify(&self.host.display(&self.menu), &self.config)
    }

    pub fn toggle(&self) -> MenuResult<Visibility> {
        flip(&self.host, &self.menu, &self.config)
    }

    pub fn open(&self) -> MenuResult<()> {
        self.set(Visibility::Visible)
    }

    pub fn close(&self) -> MenuResult<()> {
        self.set(Visibility::Hidden)
    }

    /// Document-wide click: close unless the click landed inside the menu
    /// or on the toggle control. Returns true when the menu was hidden.
    pub fn handle_click(&self, target: Option<&H::Node>) -> MenuResult<bool> {
        if !is_outside(&self.host, &self.menu, &self.toggle, target) {
            return Ok(false);
        }
        self.close()?;
        Ok(true)
    }

    fn set(&self, visibility: Visibility) -> MenuResult<()> {
        self.host
            .set_display(&self.menu, visibility.display_value(&self.config))
    }
}
