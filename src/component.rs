//! Attachable Components
//!
//! A component owns an element that is not yet in the page and the host it
//! is inserted into.

use crate::dom::{find_by_id, Dom};
use crate::error::{BoardError, BoardResult};

/// Element plus its host container
#[derive(Debug, Clone)]
pub struct Component<N> {
    element: N,
    host: N,
    /// Insert as the first child of the host instead of the last
    insert_before: bool,
}

impl<N: Clone> Component<N> {
    pub fn new(element: N, host: N, insert_before: bool) -> Self {
        Self {
            element,
            host,
            insert_before,
        }
    }

    pub fn element(&self) -> &N {
        &self.element
    }
}

/// Resolve a host by id, or the document body when no id is given
pub fn resolve_host<D: Dom>(dom: &D, host_id: Option<&str>) -> BoardResult<D::Node> {
    match host_id {
        Some(id) => find_by_id(dom, id),
        None => dom
            .body()
            .ok_or_else(|| BoardError::not_found("document body")),
    }
}

/// Something that can be inserted into and removed from the page
pub trait Attachable<D: Dom> {
    fn component(&self) -> &Component<D::Node>;

    fn attach(&self, dom: &mut D) -> BoardResult<()> {
        let component = self.component();
        if component.insert_before {
            dom.prepend_child(&component.host, &component.element)
        } else {
            dom.append_child(&component.host, &component.element)
        }
    }

    fn detach(&self, dom: &mut D) {
        let element = self.component().element();
        if dom.parent(element).is_some() {
            dom.remove(element);
        }
    }
}
