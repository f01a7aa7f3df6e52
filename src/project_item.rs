//! Project Item
//!
//! Behavior of one card: its tooltip, its switch button and its drag signals.

use leptos_dragdrop::DropEffect;

use crate::config::BoardConfig;
use crate::dom::{clear_event_listeners, find_by_id, Dom};
use crate::error::{BoardError, BoardResult};
use crate::models::{BoardEvent, CardButton, HandlerKey, HandlerSlot, ListKind};
use crate::tooltip::{Tooltip, TooltipObserver};

#[derive(Debug)]
pub struct ProjectItem<N> {
    id: String,
    /// List whose `switch_project` runs when the switch button is clicked
    switch_handler: ListKind,
    has_active_tooltip: bool,
    tooltip: Option<Tooltip<N>>,
}

impl<N: Clone + std::fmt::Debug> ProjectItem<N> {
    /// Wire up the card `id` of the `kind` list
    pub fn new<D>(dom: &mut D, id: &str, switch_handler: ListKind, kind: ListKind) -> BoardResult<Self>
    where
        D: Dom<Node = N>,
    {
        let mut item = Self {
            id: id.to_string(),
            switch_handler,
            has_active_tooltip: false,
            tooltip: None,
        };
        item.connect_more_info_button(dom)?;
        item.connect_switch_button(dom, kind)?;
        item.connect_drag(dom)?;
        Ok(item)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    #[cfg(test)]
    pub fn switch_handler(&self) -> ListKind {
        self.switch_handler
    }

    pub fn has_active_tooltip(&self) -> bool {
        self.has_active_tooltip
    }

    /// Open the tooltip unless one is already open
    pub fn show_more_info<D>(&mut self, dom: &mut D, config: &BoardConfig) -> BoardResult<()>
    where
        D: Dom<Node = N>,
    {
        if self.has_active_tooltip {
            return Ok(());
        }
        let card = find_by_id(dom, &self.id)?;
        let text = dom
            .attribute(&card, &config.extra_info_attribute)
            .unwrap_or_default();
        let mut tooltip = Tooltip::new(dom, config, &self.id, &text)?;
        tooltip.show(dom)?;
        self.tooltip = Some(tooltip);
        self.has_active_tooltip = true;
        Ok(())
    }

    pub fn close_tooltip<D>(&mut self, dom: &mut D)
    where
        D: Dom<Node = N>,
    {
        if let Some(mut tooltip) = self.tooltip.take() {
            tooltip.close(dom, self);
        }
    }

    /// Rebind the switch button for a card now shown in the `kind` list
    pub fn connect_switch_button<D>(&mut self, dom: &mut D, kind: ListKind) -> BoardResult<()>
    where
        D: Dom<Node = N>,
    {
        let button = self.button(dom, CardButton::Switch)?;
        let button = clear_event_listeners(dom, &button)?;
        dom.set_text(&button, kind.switch_label());
        dom.on_click(
            &button,
            HandlerKey::new(&self.id, HandlerSlot::Switch),
            BoardEvent::SwitchClicked {
                list: self.switch_handler,
                id: self.id.clone(),
            },
        );
        Ok(())
    }

    /// Called by the list that just took this card over
    pub fn update<D>(&mut self, dom: &mut D, switch_handler: ListKind, kind: ListKind) -> BoardResult<()>
    where
        D: Dom<Node = N>,
    {
        self.switch_handler = switch_handler;
        self.connect_switch_button(dom, kind)
    }

    /// A drag that nobody accepted is reported to the user
    pub fn drag_ended(&self, effect: DropEffect, config: &BoardConfig) -> BoardResult<()> {
        if effect.dropped() {
            log::debug!("drag end: {} ({})", self.id, effect.as_str());
            Ok(())
        } else {
            Err(BoardError::InvalidDrop(config.invalid_drop_message.clone()))
        }
    }

    fn connect_more_info_button<D>(&mut self, dom: &mut D) -> BoardResult<()>
    where
        D: Dom<Node = N>,
    {
        let button = self.button(dom, CardButton::MoreInfo)?;
        dom.on_click(
            &button,
            HandlerKey::new(&self.id, HandlerSlot::MoreInfo),
            BoardEvent::MoreInfoClicked { id: self.id.clone() },
        );
        Ok(())
    }

    fn connect_drag<D>(&mut self, dom: &mut D) -> BoardResult<()>
    where
        D: Dom<Node = N>,
    {
        let card = find_by_id(dom, &self.id)?;
        dom.make_draggable(&card, &self.id);
        Ok(())
    }

    fn button<D>(&self, dom: &D, button: CardButton) -> BoardResult<N>
    where
        D: Dom<Node = N>,
    {
        let card = find_by_id(dom, &self.id)?;
        dom.card_button(&card, button)
            .ok_or_else(|| BoardError::not_found(format!("{:?} button of card #{}", button, self.id)))
    }
}

impl<N> TooltipObserver for ProjectItem<N> {
    fn on_close(&mut self) {
        self.has_active_tooltip = false;
    }
}
