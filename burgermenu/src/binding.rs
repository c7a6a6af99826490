use std::rc::Rc;

use log::{debug, error};

use crate::config::MenuConfig;
use crate::controller::MenuToggleController;
use crate::error::MenuResult;
use crate::host::{ClickHandler, ClickSource};
use crate::visibility::Visibility;

/// A controller wired to its host's click events.
///
/// Owns the event subscriptions: dropping the binding (or calling
/// [`MenuBinding::teardown`]) unsubscribes every listener it registered.
pub struct MenuBinding<H: ClickSource> {
    controller: Rc<MenuToggleController<H>>,
    subscriptions: Vec<H::Subscription>,
}

impl<H: ClickSource + 'static> MenuBinding<H> {
    pub fn install(host: H, config: MenuConfig) -> MenuResult<Self> {
        let controller = Rc::new(MenuToggleController::attach(host, config)?);
        let mut subscriptions = Vec::new();

        let dismiss = Rc::clone(&controller);
        let on_click: ClickHandler<H::Node> =
            Rc::new(move |target: Option<&H::Node>| {
                if let Err(err) = dismiss.handle_click(target) {
                    error!("Outside-click handler failed: {}", err);
                }
            });
        subscriptions.push(controller.host().on_document_click(on_click)?);

        if controller.config().bind_toggle {
            let toggle = Rc::clone(&controller);
            let on_toggle: ClickHandler<H::Node> =
                Rc::new(move |_: Option<&H::Node>| {
                    if let Err(err) = toggle.toggle() {
                        error!("Toggle handler failed: {}", err);
                    }
                });
            subscriptions.push(
                controller
                    .host()
                    .on_element_click(controller.toggle_control(), on_toggle)?,
            );
        }

        debug!("Menu binding installed ({} listeners)", subscriptions.len());
        Ok(Self {
            controller,
            subscriptions,
        })
    }

    pub fn controller(&self) -> &MenuToggleController<H> {
        &self.controller
    }

    pub fn toggle(&self) -> MenuResult<Visibility> {
        self.controller.toggle()
    }

    pub fn close(&self) -> MenuResult<()> {
        self.controller.close()
    }

    pub fn visibility(&self) -> Visibility {
        self.controller.visibility()
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn teardown(self) {
        drop(self);
    }
}

impl<H: ClickSource> Drop for MenuBinding<H> {
    fn drop(&mut self) {
        let count = self.subscriptions.len();
        self.subscriptions.clear();
        debug!("Menu binding removed ({} listeners)", count);
    }
}
