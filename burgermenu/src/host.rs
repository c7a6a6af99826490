use std::rc::Rc;

use crate::error::MenuResult;

/// Access to the page that owns the menu markup.
///
/// The menu logic never creates or destroys nodes; it only looks them up,
/// checks containment and reads or writes the display attribute.
pub trait MenuHost {
    type Node: Clone + 'static;

    /// First node matching `selector`, or `None` when absent.
    fn query_selector(&self, selector: &str) -> MenuResult<Option<Self::Node>>;

    /// Current display value, empty when unset.
    fn display(&self, node: &Self::Node) -> String;

    fn set_display(&self, node: &Self::Node, value: &str) -> MenuResult<()>;

    /// True when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;
}

/// Receives the click target; `None` when the target is not a node.
pub type ClickHandler<N> = Rc<dyn Fn(Option<&N>)>;

/// Hosts that deliver click events. A returned subscription stays active
/// until it is dropped.
pub trait ClickSource: MenuHost {
    type Subscription;

    fn on_document_click(
        &self,
        handler: ClickHandler<Self::Node>,
    ) -> MenuResult<Self::Subscription>;

    fn on_element_click(
        &self,
        node: &Self::Node,
        handler: ClickHandler<Self::Node>,
    ) -> MenuResult<Self::Subscription>;
}
