//! Board
//!
//! Composition root: both lists, cross-wired so that switching a card out of
//! one list hands it to the other. Every UI event is routed through
//! [`Board::react`].

use crate::config::BoardConfig;
use crate::dom::Dom;
use crate::error::{BoardError, BoardResult};
use crate::models::{BoardEvent, ListKind, Reaction};
use crate::project_item::ProjectItem;
use crate::project_list::ProjectList;

pub struct Board<D: Dom> {
    config: BoardConfig,
    active: ProjectList<D::Node>,
    finished: ProjectList<D::Node>,
}

impl<D: Dom> Board<D> {
    /// Adopt both lists from the page and connect them to each other
    pub fn init(dom: &mut D, config: BoardConfig) -> BoardResult<Self> {
        let mut active = ProjectList::new(dom, ListKind::Active)?;
        let mut finished = ProjectList::new(dom, ListKind::Finished)?;
        active.set_switch_handler(active.kind().other());
        finished.set_switch_handler(finished.kind().other());

        Ok(Self {
            config,
            active,
            finished,
        })
    }

    pub fn list(&self, kind: ListKind) -> &ProjectList<D::Node> {
        match kind {
            ListKind::Active => &self.active,
            ListKind::Finished => &self.finished,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut ProjectList<D::Node> {
        match kind {
            ListKind::Active => &mut self.active,
            ListKind::Finished => &mut self.finished,
        }
    }

    /// List currently owning the card
    pub fn owner_of(&self, id: &str) -> Option<ListKind> {
        ListKind::ALL
            .into_iter()
            .find(|kind| self.list(*kind).contains(id))
    }

    pub fn open_tooltips(&self) -> usize {
        self.active.open_tooltips() + self.finished.open_tooltips()
    }

    fn item_mut(&mut self, id: &str) -> BoardResult<&mut ProjectItem<D::Node>> {
        let kind = self
            .owner_of(id)
            .ok_or_else(|| BoardError::not_found(format!("card {}", id)))?;
        self.list_mut(kind)
            .get_mut(id)
            .ok_or_else(|| BoardError::not_found(format!("card {}", id)))
    }

    /// Handle an event and surface any failure to the user or the log
    pub fn react(&mut self, dom: &mut D, event: BoardEvent) -> Reaction<D::Node> {
        match self.handle(dom, event) {
            Ok(reaction) => reaction,
            Err(err) => {
                surface(dom, &err);
                Reaction::default()
            }
        }
    }

    pub fn handle(&mut self, dom: &mut D, event: BoardEvent) -> BoardResult<Reaction<D::Node>> {
        match event {
            BoardEvent::MoreInfoClicked { id } => {
                let config = self.config.clone();
                self.item_mut(&id)?.show_more_info(dom, &config)?;
            }
            BoardEvent::SwitchClicked { list, id } => {
                self.switch_project(dom, list, &id)?;
            }
            BoardEvent::TooltipClicked { id } => {
                self.item_mut(&id)?.close_tooltip(dom);
            }
            BoardEvent::DragStarted { id } => {
                log::debug!("drag start: {}", id);
            }
            BoardEvent::DragEnded { id, effect } => {
                let kind = self
                    .owner_of(&id)
                    .ok_or_else(|| BoardError::not_found(format!("card {}", id)))?;
                if let Some(item) = self.list(kind).get(&id) {
                    item.drag_ended(effect, &self.config)?;
                }
            }
            BoardEvent::DragEntered { list, plain_text } => {
                return Ok(self.list(list).drag_enter(dom, plain_text, &self.config));
            }
            BoardEvent::DragOver { list, plain_text } => {
                return Ok(self.list(list).drag_over(dom, plain_text, &self.config));
            }
            BoardEvent::DragLeft { list, left_container } => {
                self.list(list).drag_leave(dom, left_container, &self.config);
            }
            BoardEvent::Dropped { list, payload } => {
                return self.drop(dom, list, payload);
            }
        }
        Ok(Reaction::default())
    }

    /// Run the `from` list's switch for card `id`: the card leaves `from` and
    /// joins the list wired as its switch handler
    pub fn switch_project(&mut self, dom: &mut D, from: ListKind, id: &str) -> BoardResult<()> {
        let (target, item) = self.list_mut(from).switch_project(id)?;
        log::info!("{}: {} -> {}", id, from, target);
        let config = self.config.clone();
        self.list_mut(target).add_project(dom, item, &config)
    }

    fn drop(&mut self, dom: &mut D, list: ListKind, payload: Option<String>) -> BoardResult<Reaction<D::Node>> {
        let Some(id) = payload else {
            log::debug!("drop without payload on the {} list", list);
            dom.remove_class(self.list(list).section(), &self.config.droppable_class);
            return Ok(Reaction::accept());
        };
        if self.owner_of(&id).is_none() {
            dom.remove_class(self.list(list).section(), &self.config.droppable_class);
            return Err(BoardError::not_found(format!("card {}", id)));
        }
        let click = self.list(list).drop(dom, &id, &self.config)?;
        Ok(Reaction {
            prevent_default: true,
            click,
        })
    }
}

/// Invalid drops become an alert, everything else goes to the log
pub fn surface<D: Dom>(dom: &mut D, err: &BoardError) {
    match err {
        BoardError::InvalidDrop(message) => {
            log::warn!("{}", err);
            dom.alert(message);
        }
        _ => log::error!("{}", err),
    }
}
