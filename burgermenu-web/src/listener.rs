use burgermenu::{ClickHandler, MenuError, MenuResult};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, Node};

use crate::dom::js_message;

const CLICK: &str = "click";

/// A `click` listener registered on an event target. Dropping it removes
/// the listener again.
pub struct ClickListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(Event)>,
}

impl ClickListener {
    pub fn new(
        target: EventTarget,
        handler: ClickHandler<Node>,
    ) -> MenuResult<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let node = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok());
            handler(node.as_ref());
        });
        target
            .add_event_listener_with_callback(
                CLICK,
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|err| MenuError::Host(js_message(&err)))?;
        Ok(Self { target, closure })
    }
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(
            CLICK,
            self.closure.as_ref().unchecked_ref(),
        ) {
            warn!("Unable to remove click listener: {}", js_message(&err));
        }
    }
}
