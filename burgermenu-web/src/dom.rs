use burgermenu::{ClickHandler, ClickSource, MenuError, MenuHost, MenuResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlElement, Node};

use crate::listener::ClickListener;

pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// The live browser document as a menu host.
#[derive(Clone, Debug)]
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> MenuResult<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| {
                MenuError::Host("Unable to access window document".to_string())
            })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl MenuHost for DomHost {
    type Node = Node;

    fn query_selector(&self, selector: &str) -> MenuResult<Option<Node>> {
        self.document
            .query_selector(selector)
            .map(|element| element.map(Node::from))
            .map_err(|err| {
                MenuError::Selector(format!(
                    "\"{}\": {}",
                    selector,
                    js_message(&err)
                ))
            })
    }

    fn display(&self, node: &Node) -> String {
        node.dyn_ref::<HtmlElement>()
            .and_then(|element| {
                element.style().get_property_value("display").ok()
            })
            .unwrap_or_default()
    }

    fn set_display(&self, node: &Node, value: &str) -> MenuResult<()> {
        let element = node.dyn_ref::<HtmlElement>().ok_or_else(|| {
            MenuError::Host(format!(
                "<{}> has no inline style",
                node.node_name().to_lowercase()
            ))
        })?;
        element
            .style()
            .set_property("display", value)
            .map_err(|err| MenuError::Host(js_message(&err)))
    }

    fn contains(&self, ancestor: &Node, node: &Node) -> bool {
        ancestor.contains(Some(node))
    }
}

impl ClickSource for DomHost {
    type Subscription = ClickListener;

    fn on_document_click(
        &self,
        handler: ClickHandler<Node>,
    ) -> MenuResult<ClickListener> {
        ClickListener::new(EventTarget::from(self.document.clone()), handler)
    }

    fn on_element_click(
        &self,
        node: &Node,
        handler: ClickHandler<Node>,
    ) -> MenuResult<ClickListener> {
        ClickListener::new(EventTarget::from(node.clone()), handler)
    }
}
