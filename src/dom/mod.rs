//! DOM Adapter
//!
//! `Dom` is the seam between the board and a document: `WebDom` drives the
//! real page through web-sys, tests drive an in-memory tree.

mod web;

#[cfg(test)]
pub mod memory;

pub use web::{read_config_text, EventSink, WebDom};

use crate::error::{BoardError, BoardResult};
use crate::models::{BoardEvent, CardButton, HandlerKey, Layout, ListKind, Position};

/// Document operations the board relies on
pub trait Dom {
    /// Handle to an element
    type Node: Clone + std::fmt::Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element matching `selector`
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;

    /// Ids of the elements matching `selector`, in document order
    fn ids_matching(&self, selector: &str) -> Vec<String>;

    fn body(&self) -> Option<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn card_button(&self, card: &Self::Node, button: CardButton) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> BoardResult<()>;

    fn prepend_child(&mut self, parent: &Self::Node, child: &Self::Node) -> BoardResult<()>;

    /// Remove from the parent. Detached nodes are left alone.
    fn remove(&mut self, node: &Self::Node);

    /// Swap `node` for a listener-free deep copy and return the copy
    fn replace_with_clone(&mut self, node: &Self::Node) -> BoardResult<Self::Node>;

    fn scroll_into_view(&mut self, node: &Self::Node, smooth: bool);

    fn layout(&self, node: &Self::Node) -> Layout;

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Detached `div.card` built from the template's content, `text` written
    /// into its first paragraph, absolutely positioned at `at`
    fn create_tooltip(&mut self, template_id: &str, text: &str, at: Position) -> BoardResult<Self::Node>;

    /// Deliver `event` when `node` is clicked. Binding a key again drops the
    /// handler previously registered under it.
    fn on_click(&mut self, node: &Self::Node, key: HandlerKey, event: BoardEvent);

    /// Drop the handler registered under `key`
    fn release(&mut self, key: &HandlerKey);

    /// Deliver `DragStarted` / `DragEnded` for the card
    fn make_draggable(&mut self, card: &Self::Node, id: &str);

    /// Deliver `DragEntered`, `DragOver`, `DragLeft` and `Dropped` for the list
    fn make_drop_target(&mut self, container: &Self::Node, list: ListKind);

    /// Blocking user notification
    fn alert(&mut self, message: &str);
}

pub fn find_by_id<D: Dom>(dom: &D, id: &str) -> BoardResult<D::Node> {
    dom.element_by_id(id)
        .ok_or_else(|| BoardError::not_found(format!("element #{}", id)))
}

pub fn find<D: Dom>(dom: &D, selector: &str) -> BoardResult<D::Node> {
    dom.query_selector(selector)
        .ok_or_else(|| BoardError::not_found(format!("selector `{}`", selector)))
}

/// Replace `element` with a copy carrying no listeners; use the returned node
/// from then on.
pub fn clear_event_listeners<D: Dom>(dom: &mut D, element: &D::Node) -> BoardResult<D::Node> {
    dom.replace_with_clone(element)
}

/// Move the element with `element_id` to the end of `parent_selector`'s
/// element, then bring it into view.
pub fn move_element<D: Dom>(
    dom: &mut D,
    element_id: &str,
    parent_selector: &str,
    smooth: bool,
) -> BoardResult<()> {
    let element = find_by_id(dom, element_id)?;
    let parent = find(dom, parent_selector)?;
    dom.append_child(&parent, &element)?;
    dom.scroll_into_view(&element, smooth);
    Ok(())
}
