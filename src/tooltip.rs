//! Tooltip
//!
//! Extra information shown under a card. Lives from construction until it is
//! clicked; closing is terminal.

use crate::component::{resolve_host, Attachable, Component};
use crate::config::BoardConfig;
use crate::dom::Dom;
use crate::error::BoardResult;
use crate::models::{BoardEvent, HandlerKey, HandlerSlot, Layout, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    /// Built, not in the page yet
    Created,
    Attached,
    Closed,
}

/// Notified when a tooltip closes
pub trait TooltipObserver {
    fn on_close(&mut self);
}

#[derive(Debug)]
pub struct Tooltip<N> {
    base: Component<N>,
    owner_id: String,
    state: TooltipState,
}

impl<N: Clone + std::fmt::Debug> Tooltip<N> {
    /// Build the tooltip for the card `host_id`. The element stays detached
    /// until `show`.
    pub fn new<D>(dom: &mut D, config: &BoardConfig, host_id: &str, text: &str) -> BoardResult<Self>
    where
        D: Dom<Node = N>,
    {
        let host = resolve_host(dom, Some(host_id))?;
        let at = tooltip_position(dom.layout(&host), config);
        let element = dom.create_tooltip(&config.tooltip_template_id, text, at)?;
        dom.on_click(
            &element,
            HandlerKey::new(host_id, HandlerSlot::Tooltip),
            BoardEvent::TooltipClicked {
                id: host_id.to_string(),
            },
        );

        Ok(Self {
            base: Component::new(element, host, false),
            owner_id: host_id.to_string(),
            state: TooltipState::Created,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> TooltipState {
        self.state
    }

    #[cfg(test)]
    pub fn element(&self) -> &N {
        self.base.element()
    }

    pub fn show<D: Dom<Node = N>>(&mut self, dom: &mut D) -> BoardResult<()> {
        self.attach(dom)?;
        self.state = TooltipState::Attached;
        Ok(())
    }

    /// Detach, drop the click handler and tell the owner
    pub fn close<D, O>(&mut self, dom: &mut D, owner: &mut O)
    where
        D: Dom<Node = N>,
        O: TooltipObserver + ?Sized,
    {
        if self.state == TooltipState::Closed {
            return;
        }
        self.detach(dom);
        dom.release(&HandlerKey::new(&self.owner_id, HandlerSlot::Tooltip));
        self.state = TooltipState::Closed;
        owner.on_close();
    }
}

impl<D: Dom> Attachable<D> for Tooltip<D::Node> {
    fn component(&self) -> &Component<D::Node> {
        &self.base
    }
}

/// Just below the host's bottom edge, corrected for the list's scroll
pub fn tooltip_position(layout: Layout, config: &BoardConfig) -> Position {
    Position {
        x: layout.offset_left + config.tooltip_offset_x,
        y: layout.offset_top + layout.client_height - layout.parent_scroll_top + config.tooltip_offset_y,
    }
}
