mod selector;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicUsize, Ordering};

pub use selector::Selector;

use crate::error::{MenuError, MenuResult};
use crate::host::{ClickHandler, ClickSource, MenuHost};

static NEXT_PAGE: AtomicUsize = AtomicUsize::new(0);

/// Handle to an element. Only valid for the [`Page`] that created it;
/// other pages treat it as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    page: usize,
    index: usize,
}

#[derive(Debug)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    display: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ElementData {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            display: String::new(),
            parent,
            children: Vec::new(),
        }
    }
}

struct Listener {
    id: u64,
    // None listens on the document itself
    node: Option<NodeId>,
    handler: ClickHandler<NodeId>,
}

struct PageInner {
    page: usize,
    elements: Vec<ElementData>,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl PageInner {
    fn body(&self) -> NodeId {
        NodeId {
            page: self.page,
            index: 0,
        }
    }

    fn owns(&self, node: NodeId) -> bool {
        node.page == self.page && node.index < self.elements.len()
    }

    fn foreign(&self, node: NodeId) -> MenuError {
        MenuError::Host(format!("{:?} belongs to another page", node))
    }

    // only for nodes known to be owned: tree links and checked inputs
    fn element(&self, node: NodeId) -> &ElementData {
        &self.elements[node.index]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut ElementData {
        &mut self.elements[node.index]
    }

    fn add_listener(
        &mut self,
        node: Option<NodeId>,
        handler: ClickHandler<NodeId>,
    ) -> u64 {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push(Listener { id, node, handler });
        id
    }
}

/// An in-memory element tree rooted at `<body>`.
///
/// Clones share the same tree. Elements are never freed; [`Page::remove`]
/// only detaches them, after which selector lookups no longer see them.
/// A [`NodeId`] from another page is never confused with one of this
/// page's elements.
#[derive(Clone)]
pub struct Page {
    inner: Rc<RefCell<PageInner>>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        let inner = PageInner {
            page: NEXT_PAGE.fetch_add(1, Ordering::Relaxed),
            elements: vec![ElementData::new("body", None)],
            listeners: Vec::new(),
            next_listener: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn body(&self) -> NodeId {
        self.inner.borrow().body()
    }

    pub fn owns(&self, node: NodeId) -> bool {
        self.inner.borrow().owns(node)
    }

    /// # Panics
    ///
    /// When `parent` belongs to another page.
    pub fn append(
        &self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
    ) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        assert!(inner.owns(parent), "{:?} belongs to another page", parent);
        let node = NodeId {
            page: inner.page,
            index: inner.elements.len(),
        };
        let mut element = ElementData::new(tag, Some(parent));
        element.classes = classes.iter().map(|c| c.to_string()).collect();
        inner.elements.push(element);
        inner.element_mut(parent).children.push(node);
        node
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner.owns(node) {
            inner.element_mut(node).id = Some(id.to_string());
        }
    }

    /// Detach `node` and its subtree from the page.
    pub fn remove(&self, node: NodeId) {
        let mut inner = self.inner.borrow_mut();
        if !inner.owns(node) || node == inner.body() {
            return;
        }
        if let Some(parent) = inner.element_mut(node).parent.take() {
            inner.element_mut(parent).children.retain(|c| *c != node);
        }
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let inner = self.inner.borrow();
        if !inner.owns(node) {
            return false;
        }
        let mut current = node;
        while let Some(parent) = inner.element(current).parent {
            current = parent;
        }
        current == inner.body()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Dispatch a click on `target`: element listeners from the target up
    /// to the root, then document listeners. Clicks on nodes of another
    /// page are not dispatched.
    pub fn click(&self, target: NodeId) {
        if !self.owns(target) {
            return;
        }
        for handler in self.handlers_for(Some(target)) {
            handler(Some(&target));
        }
    }

    /// Dispatch a click whose target is not an element.
    pub fn click_document(&self) {
        for handler in self.handlers_for(None) {
            handler(None);
        }
    }

    // handlers are collected first so they may borrow the page themselves
    fn handlers_for(
        &self,
        target: Option<NodeId>,
    ) -> Vec<ClickHandler<NodeId>> {
        let inner = self.inner.borrow();
        let mut path = Vec::new();
        let mut current = target;
        while let Some(node) = current {
            path.push(node);
            current = inner.element(node).parent;
        }

        let mut handlers = Vec::new();
        for node in path {
            handlers.extend(
                inner
                    .listeners
                    .iter()
                    .filter(|l| l.node == Some(node))
                    .map(|l| Rc::clone(&l.handler)),
            );
        }
        handlers.extend(
            inner
                .listeners
                .iter()
                .filter(|l| l.node.is_none())
                .map(|l| Rc::clone(&l.handler)),
        );
        handlers
    }

    fn subscribe(
        &self,
        node: Option<NodeId>,
        handler: ClickHandler<NodeId>,
    ) -> PageSubscription {
        let id = self.inner.borrow_mut().add_listener(node, handler);
        PageSubscription {
            page: Rc::downgrade(&self.inner),
            id,
        }
    }
}

impl MenuHost for Page {
    type Node = NodeId;

    fn query_selector(&self, selector: &str) -> MenuResult<Option<NodeId>> {
        let selector = Selector::parse(selector)?;
        let inner = self.inner.borrow();
        let mut stack = vec![inner.body()];
        while let Some(node) = stack.pop() {
            let element = inner.element(node);
            if selector.matches(
                &element.tag,
                element.id.as_deref(),
                &element.classes,
            ) {
                return Ok(Some(node));
            }
            stack.extend(element.children.iter().rev().copied());
        }
        Ok(None)
    }

    fn display(&self, node: &NodeId) -> String {
        let inner = self.inner.borrow();
        if !inner.owns(*node) {
            return String::new();
        }
        inner.element(*node).display.clone()
    }

    fn set_display(&self, node: &NodeId, value: &str) -> MenuResult<()> {
        let mut inner = self.inner.borrow_mut();
        if !inner.owns(*node) {
            return Err(inner.foreign(*node));
        }
        inner.element_mut(*node).display = value.to_string();
        Ok(())
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let inner = self.inner.borrow();
        if !inner.owns(*ancestor) || !inner.owns(*node) {
            return false;
        }
        let mut current = Some(*node);
        while let Some(n) = current {
            if n == *ancestor {
                return true;
            }
            current = inner.element(n).parent;
        }
        false
    }
}

impl ClickSource for Page {
    type Subscription = PageSubscription;

    fn on_document_click(
        &self,
        handler: ClickHandler<NodeId>,
    ) -> MenuResult<PageSubscription> {
        Ok(self.subscribe(None, handler))
    }

    fn on_element_click(
        &self,
        node: &NodeId,
        handler: ClickHandler<NodeId>,
    ) -> MenuResult<PageSubscription> {
        if !self.owns(*node) {
            return Err(self.inner.borrow().foreign(*node));
        }
        Ok(self.subscribe(Some(*node), handler))
    }
}

/// Removes its listener from the page when dropped.
pub struct PageSubscription {
    page: Weak<RefCell<PageInner>>,
    id: u64,
}

impl Drop for PageSubscription {
    fn drop(&mut self) {
        if let Some(page) = self.page.upgrade() {
            page.borrow_mut().listeners.retain(|l| l.id != self.id);
        }
    }
}
