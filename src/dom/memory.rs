//! In-memory document used by the unit tests.
//!
//! Supports the selector subset the board uses: whitespace-separated
//! descendant chains of `#id` and tag names.

use std::collections::{HashMap, HashSet};

use super::Dom;
use crate::error::{BoardError, BoardResult};
use crate::models::{BoardEvent, CardButton, HandlerKey, Layout, ListKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    id: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    text: String,
    position: Option<Position>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

pub struct MemoryDom {
    nodes: Vec<NodeData>,
    body: NodeId,
    handlers: HashMap<HandlerKey, (NodeId, BoardEvent)>,
    layouts: HashMap<NodeId, Layout>,
    alerts: Vec<String>,
    scrolled: Vec<(NodeId, bool)>,
    draggables: Vec<String>,
    drop_targets: Vec<ListKind>,
}

impl MemoryDom {
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            body: NodeId(0),
            handlers: HashMap::new(),
            layouts: HashMap::new(),
            alerts: Vec::new(),
            scrolled: Vec::new(),
            draggables: Vec::new(),
            drop_targets: Vec::new(),
        };
        dom.body = dom.create("body");
        dom
    }

    /// Page following the board markup: one section per list, cards as
    /// `(list, id, extra info)`, and the tooltip template.
    pub fn board(cards: &[(ListKind, &str, &str)]) -> Self {
        let mut dom = Self::new();
        let body = dom.body;
        for kind in ListKind::ALL {
            let section = dom.create("section");
            dom.nodes[section.0].id = kind.section_id();
            dom.attach_last(body, section);
            let list = dom.create("ul");
            dom.attach_last(section, list);
            for (_, id, extra) in cards.iter().filter(|(k, _, _)| *k == kind) {
                let card = dom.create("li");
                dom.nodes[card.0].id = id.to_string();
                dom.nodes[card.0]
                    .attributes
                    .insert("data-extra-info".to_string(), extra.to_string());
                dom.attach_last(list, card);
                let title = dom.create("h2");
                dom.nodes[title.0].text = format!("Project {}", id);
                dom.attach_last(card, title);
                let info = dom.create("button");
                dom.nodes[info.0].text = "More Info".to_string();
                dom.attach_last(card, info);
                let switch = dom.create("button");
                dom.nodes[switch.0].text = kind.switch_label().to_string();
                dom.attach_last(card, switch);
            }
        }
        let template = dom.create("template");
        dom.nodes[template.0].id = "tooltip".to_string();
        dom.attach_last(body, template);
        let heading = dom.create("h2");
        dom.nodes[heading.0].text = "More Info".to_string();
        dom.attach_last(template, heading);
        let placeholder = dom.create("p");
        dom.attach_last(template, placeholder);
        dom
    }

    pub fn create(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            ..Default::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn set_layout(&mut self, node: NodeId, layout: Layout) {
        self.layouts.insert(node, layout);
    }

    pub fn text(&self, node: &NodeId) -> &str {
        &self.nodes[node.0].text
    }

    pub fn position(&self, node: &NodeId) -> Option<Position> {
        self.nodes[node.0].position
    }

    pub fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn children(&self, node: &NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Whether the node is reachable from the body
    pub fn is_attached(&self, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// Card ids in DOM order under the list's container
    pub fn card_ids_in(&self, kind: ListKind) -> Vec<String> {
        self.ids_matching(&kind.card_selector())
    }

    /// Events delivered when `node` is clicked
    pub fn bound(&self, node: &NodeId) -> Vec<BoardEvent> {
        let mut events: Vec<(String, BoardEvent)> = self
            .handlers
            .iter()
            .filter(|(_, (target, _))| target == node)
            .map(|(key, (_, event))| (format!("{:?}", key), event.clone()))
            .collect();
        events.sort_by(|a, b| a.0.cmp(&b.0));
        events.into_iter().map(|(_, event)| event).collect()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn scrolled(&self) -> &[(NodeId, bool)] {
        &self.scrolled
    }

    pub fn draggables(&self) -> &[String] {
        &self.draggables
    }

    pub fn drop_targets(&self) -> &[ListKind] {
        &self.drop_targets
    }

    fn attach_last(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != child);
        }
    }

    /// Descendants of `node` in document order
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, token: &str) -> bool {
        match token.strip_prefix('#') {
            Some(id) => self.nodes[node.0].id == id,
            None => self.nodes[node.0].tag == token,
        }
    }

    fn select_all(&self, selector: &str) -> Vec<NodeId> {
        let mut scope = vec![self.body];
        for token in selector.split_whitespace() {
            let mut seen = HashSet::new();
            scope = scope
                .iter()
                .flat_map(|root| self.descendants(*root))
                .filter(|node| self.matches(*node, token) && seen.insert(*node))
                .collect();
        }
        scope
    }

    fn deep_clone(&mut self, node: NodeId) -> NodeId {
        let data = self.nodes[node.0].clone();
        let copy = self.create(&data.tag);
        self.nodes[copy.0].id = data.id;
        self.nodes[copy.0].classes = data.classes;
        self.nodes[copy.0].attributes = data.attributes;
        self.nodes[copy.0].text = data.text;
        self.nodes[copy.0].position = data.position;
        for child in data.children {
            let child_copy = self.deep_clone(child);
            self.attach_last(copy, child_copy);
        }
        copy
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.body)
            .chain(self.descendants(self.body))
            .find(|node| self.nodes[node.0].id == id)
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.select_all(selector).into_iter().next()
    }

    fn ids_matching(&self, selector: &str) -> Vec<String> {
        self.select_all(selector)
            .into_iter()
            .map(|node| self.nodes[node.0].id.clone())
            .collect()
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn card_button(&self, card: &NodeId, button: CardButton) -> Option<NodeId> {
        let mut buttons = self
            .descendants(*card)
            .into_iter()
            .filter(|node| self.nodes[node.0].tag == "button");
        match button {
            CardButton::MoreInfo => buttons.next(),
            CardButton::Switch => buttons.last(),
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.get(name).cloned()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.nodes[node.0].text = text.to_string();
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> BoardResult<()> {
        self.attach_last(*parent, *child);
        Ok(())
    }

    fn prepend_child(&mut self, parent: &NodeId, child: &NodeId) -> BoardResult<()> {
        self.detach(*child);
        self.nodes[parent.0].children.insert(0, *child);
        self.nodes[child.0].parent = Some(*parent);
        Ok(())
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn replace_with_clone(&mut self, node: &NodeId) -> BoardResult<NodeId> {
        let copy = self.deep_clone(*node);
        if let Some(parent) = self.nodes[node.0].parent.take() {
            let children = &mut self.nodes[parent.0].children;
            if let Some(slot) = children.iter_mut().find(|c| **c == *node) {
                *slot = copy;
            }
            self.nodes[copy.0].parent = Some(parent);
        }
        Ok(copy)
    }

    fn scroll_into_view(&mut self, node: &NodeId, smooth: bool) {
        self.scrolled.push((*node, smooth));
    }

    fn layout(&self, node: &NodeId) -> Layout {
        self.layouts.get(node).copied().unwrap_or_default()
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn create_tooltip(&mut self, template_id: &str, text: &str, at: Position) -> BoardResult<NodeId> {
        let template = self
            .element_by_id(template_id)
            .ok_or_else(|| BoardError::not_found(format!("template #{}", template_id)))?;
        let tooltip = self.create("div");
        self.nodes[tooltip.0].classes.push("card".to_string());
        self.nodes[tooltip.0].position = Some(at);
        for child in self.nodes[template.0].children.clone() {
            let copy = self.deep_clone(child);
            self.attach_last(tooltip, copy);
        }
        let paragraph = self
            .descendants(tooltip)
            .into_iter()
            .find(|node| self.nodes[node.0].tag == "p")
            .ok_or_else(|| BoardError::not_found(format!("paragraph in template #{}", template_id)))?;
        self.nodes[paragraph.0].text = text.to_string();
        Ok(tooltip)
    }

    fn on_click(&mut self, node: &NodeId, key: HandlerKey, event: BoardEvent) {
        self.handlers.insert(key, (*node, event));
    }

    fn release(&mut self, key: &HandlerKey) {
        self.handlers.remove(key);
    }

    fn make_draggable(&mut self, _card: &NodeId, id: &str) {
        self.draggables.push(id.to_string());
    }

    fn make_drop_target(&mut self, _container: &NodeId, list: ListKind) {
        self.drop_targets.push(list);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
