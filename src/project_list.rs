//! Project List
//!
//! Owns the cards of one list and acts as a drop target for the other one.

use crate::config::BoardConfig;
use crate::dom::{find, find_by_id, move_element, Dom};
use crate::error::{BoardError, BoardResult};
use crate::models::{CardButton, ListKind, Reaction};
use crate::project_item::ProjectItem;

#[derive(Debug)]
pub struct ProjectList<N> {
    kind: ListKind,
    /// Visual order
    projects: Vec<ProjectItem<N>>,
    /// List receiving the cards switched out of this one
    switch_handler: Option<ListKind>,
    /// Parent of the container, carries the droppable marker
    section: N,
}

impl<N: Clone + std::fmt::Debug> ProjectList<N> {
    /// Adopt every card already in the page under this list
    pub fn new<D>(dom: &mut D, kind: ListKind) -> BoardResult<Self>
    where
        D: Dom<Node = N>,
    {
        let container = find(dom, &kind.container_selector())?;
        let section = dom
            .parent(&container)
            .ok_or_else(|| BoardError::not_found(format!("section of the {} list", kind)))?;

        let mut projects = Vec::new();
        for id in dom.ids_matching(&kind.card_selector()) {
            if id.is_empty() {
                log::warn!("skipping a card without id in the {} list", kind);
                continue;
            }
            projects.push(ProjectItem::new(dom, &id, kind, kind)?);
        }
        dom.make_drop_target(&container, kind);
        log::info!("{} list: {} cards", kind, projects.len());

        Ok(Self {
            kind,
            projects,
            switch_handler: None,
            section,
        })
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn ids(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.id().to_string()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.projects.iter().any(|p| p.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&ProjectItem<N>> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ProjectItem<N>> {
        self.projects.iter_mut().find(|p| p.id() == id)
    }

    pub fn open_tooltips(&self) -> usize {
        self.projects.iter().filter(|p| p.has_active_tooltip()).count()
    }

    pub fn set_switch_handler(&mut self, target: ListKind) {
        self.switch_handler = Some(target);
    }

    /// Take the card out of this list. Returns it together with the list it
    /// must be handed to.
    pub fn switch_project(&mut self, id: &str) -> BoardResult<(ListKind, ProjectItem<N>)> {
        let target = self
            .switch_handler
            .ok_or_else(|| BoardError::not_found(format!("switch handler of the {} list", self.kind)))?;
        let index = self
            .projects
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| BoardError::not_found(format!("card {} in the {} list", id, self.kind)))?;
        Ok((target, self.projects.remove(index)))
    }

    /// Take ownership of a card switched in from the other list
    pub fn add_project<D>(&mut self, dom: &mut D, item: ProjectItem<N>, config: &BoardConfig) -> BoardResult<()>
    where
        D: Dom<Node = N>,
    {
        let id = item.id().to_string();
        self.projects.push(item);
        move_element(dom, &id, &self.kind.container_selector(), config.smooth_scroll)?;
        let kind = self.kind;
        if let Some(item) = self.get_mut(&id) {
            item.update(dom, kind, kind)?;
        }
        Ok(())
    }

    pub fn drag_enter<D>(&self, dom: &mut D, plain_text: bool, config: &BoardConfig) -> Reaction<N>
    where
        D: Dom<Node = N>,
    {
        if !plain_text {
            return Reaction::default();
        }
        dom.add_class(&self.section, &config.droppable_class);
        Reaction::accept()
    }

    pub fn drag_over<D>(&self, dom: &mut D, plain_text: bool, config: &BoardConfig) -> Reaction<N>
    where
        D: Dom<Node = N>,
    {
        self.drag_enter(dom, plain_text, config)
    }

    /// Moving between children of the container keeps the marker
    pub fn drag_leave<D>(&self, dom: &mut D, left_container: bool, config: &BoardConfig)
    where
        D: Dom<Node = N>,
    {
        if left_container {
            dom.remove_class(&self.section, &config.droppable_class);
        }
    }

    /// Returns the switch button to click, or None when the card already
    /// belongs here
    pub fn drop<D>(&self, dom: &mut D, id: &str, config: &BoardConfig) -> BoardResult<Option<N>>
    where
        D: Dom<Node = N>,
    {
        dom.remove_class(&self.section, &config.droppable_class);
        if self.contains(id) {
            log::debug!("{} dropped back on the {} list", id, self.kind);
            return Ok(None);
        }
        let card = find_by_id(dom, id)?;
        let button = dom
            .card_button(&card, CardButton::Switch)
            .ok_or_else(|| BoardError::not_found(format!("Switch button of card #{}", id)))?;
        Ok(Some(button))
    }

    pub fn section(&self) -> &N {
        &self.section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{MemoryDom, NodeId};

    fn page() -> MemoryDom {
        MemoryDom::board(&[
            (ListKind::Active, "p1", "one"),
            (ListKind::Active, "p2", "two"),
            (ListKind::Finished, "p3", "three"),
        ])
    }

    fn lists(dom: &mut MemoryDom) -> (ProjectList<NodeId>, ProjectList<NodeId>) {
        let mut active = ProjectList::new(dom, ListKind::Active).unwrap();
        let mut finished = ProjectList::new(dom, ListKind::Finished).unwrap();
        active.set_switch_handler(ListKind::Finished);
        finished.set_switch_handler(ListKind::Active);
        (active, finished)
    }

    #[test]
    fn test_new_adopts_cards_in_order() {
        let mut dom = page();
        let (active, finished) = lists(&mut dom);

        assert_eq!(active.ids(), vec!["p1", "p2"]);
        assert_eq!(finished.ids(), vec!["p3"]);
        assert_eq!(dom.drop_targets(), &[ListKind::Active, ListKind::Finished]);
        let container = dom.query_selector("#active-projects ul").unwrap();
        assert_eq!(dom.parent(&container), Some(*active.section()));
    }

    #[test]
    fn test_switch_without_handler_fails() {
        let mut dom = page();
        let mut active = ProjectList::new(&mut dom, ListKind::Active).unwrap();

        assert!(matches!(active.switch_project("p1"), Err(BoardError::NotFound(_))));
        assert_eq!(active.ids(), vec!["p1", "p2"]);
    }

    #[test]
    fn test_switch_then_add_moves_card() {
        let mut dom = page();
        let (mut active, mut finished) = lists(&mut dom);
        let config = BoardConfig::default();

        let (target, item) = active.switch_project("p1").unwrap();
        assert_eq!(target, ListKind::Finished);
        finished.add_project(&mut dom, item, &config).unwrap();

        assert_eq!(active.ids(), vec!["p2"]);
        assert_eq!(finished.ids(), vec!["p3", "p1"]);
        assert_eq!(dom.card_ids_in(ListKind::Finished), vec!["p3", "p1"]);
        assert_eq!(finished.get("p1").unwrap().switch_handler(), ListKind::Finished);
    }

    #[test]
    fn test_unknown_card_cannot_switch() {
        let mut dom = page();
        let (mut active, _) = lists(&mut dom);
        assert!(matches!(active.switch_project("p3"), Err(BoardError::NotFound(_))));
    }

    #[test]
    fn test_drag_marker_follows_enter_and_leave() {
        let mut dom = page();
        let (active, _) = lists(&mut dom);
        let config = BoardConfig::default();

        let ignored = active.drag_enter(&mut dom, false, &config);
        assert!(!ignored.prevent_default);
        assert!(!dom.has_class(active.section(), "droppable"));

        let accepted = active.drag_enter(&mut dom, true, &config);
        assert!(accepted.prevent_default);
        assert!(dom.has_class(active.section(), "droppable"));

        active.drag_leave(&mut dom, false, &config);
        assert!(dom.has_class(active.section(), "droppable"));
        active.drag_leave(&mut dom, true, &config);
        assert!(!dom.has_class(active.section(), "droppable"));
    }

    #[test]
    fn test_drop_of_own_card_is_ignored() {
        let mut dom = page();
        let (active, _) = lists(&mut dom);
        let config = BoardConfig::default();
        active.drag_enter(&mut dom, true, &config);

        assert_eq!(active.drop(&mut dom, "p1", &config).unwrap(), None);
        assert!(!dom.has_class(active.section(), "droppable"));
        assert_eq!(dom.card_ids_in(ListKind::Active), vec!["p1", "p2"]);
    }

    #[test]
    fn test_drop_of_foreign_card_returns_its_switch_button() {
        let mut dom = page();
        let (active, _) = lists(&mut dom);
        let card = dom.element_by_id("p3").unwrap();
        let button = dom.card_button(&card, CardButton::Switch).unwrap();

        let click = active.drop(&mut dom, "p3", &BoardConfig::default()).unwrap();
        assert_eq!(click, Some(button));
    }
}
