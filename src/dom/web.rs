//! Browser DOM through web-sys.
//!
//! Listeners registered here turn page events into `BoardEvent`s and hand
//! them to the sink; they stay alive for as long as the `WebDom` does.

use std::collections::HashMap;
use std::rc::Rc;

use leptos_dragdrop::{bind_draggable, bind_drop_zone, DndSignals, EventListener, ZoneEvent};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlTemplateElement, ScrollBehavior, ScrollIntoViewOptions};

use super::Dom;
use crate::config::CONFIG_ELEMENT_ID;
use crate::error::{BoardError, BoardResult};
use crate::models::{BoardEvent, CardButton, HandlerKey, Layout, ListKind, Position};

/// Receives every page event. Returns true when the browser default must be
/// prevented.
pub type EventSink = Rc<dyn Fn(BoardEvent) -> bool>;

pub struct WebDom {
    document: Document,
    sink: EventSink,
    dnd: DndSignals,
    /// Click listeners by key
    handlers: HashMap<HandlerKey, EventListener>,
    /// Unsubscribed click listeners. A listener may be replaced from inside
    /// its own callback, so these are only dropped at the next dispatch.
    retired: Vec<EventListener>,
    drag_listeners: Vec<EventListener>,
}

impl WebDom {
    pub fn new(sink: EventSink, dnd: DndSignals) -> BoardResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| BoardError::not_found("document"))?;
        Ok(Self {
            document,
            sink,
            dnd,
            handlers: HashMap::new(),
            retired: Vec::new(),
            drag_listeners: Vec::new(),
        })
    }

    /// Drop the click listeners replaced since the last call
    pub fn drop_retired(&mut self) {
        self.retired.clear();
    }

    fn buttons(&self, card: &Element) -> Vec<Element> {
        let Ok(list) = card.query_selector_all("button") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn retire(&mut self, key: &HandlerKey) {
        if let Some(listener) = self.handlers.remove(key) {
            listener.unsubscribe();
            self.retired.push(listener);
        }
    }
}

/// Text of the page's config block, if there is one
pub fn read_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn ids_matching(&self, selector: &str) -> Vec<String> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::warn!("invalid selector `{}`", selector);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| el.id())
            .collect()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn card_button(&self, card: &Element, button: CardButton) -> Option<Element> {
        let mut buttons = self.buttons(card);
        match button {
            CardButton::MoreInfo => (!buttons.is_empty()).then(|| buttons.remove(0)),
            CardButton::Switch => buttons.pop(),
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> BoardResult<()> {
        parent.append_child(child)?;
        Ok(())
    }

    fn prepend_child(&mut self, parent: &Element, child: &Element) -> BoardResult<()> {
        parent.prepend_with_node_1(child)?;
        Ok(())
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn replace_with_clone(&mut self, node: &Element) -> BoardResult<Element> {
        let copy = node
            .clone_node_with_deep(true)?
            .dyn_into::<Element>()
            .map_err(|_| BoardError::Dom("clone is not an element".to_string()))?;
        node.replace_with_with_node_1(&copy)?;
        Ok(copy)
    }

    fn scroll_into_view(&mut self, node: &Element, smooth: bool) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn layout(&self, node: &Element) -> Layout {
        let parent_scroll_top = node
            .parent_element()
            .map(|parent| parent.scroll_top() as f64)
            .unwrap_or_default();
        match node.dyn_ref::<HtmlElement>() {
            Some(el) => Layout {
                offset_left: el.offset_left() as f64,
                offset_top: el.offset_top() as f64,
                client_height: el.client_height() as f64,
                parent_scroll_top,
            },
            None => Layout {
                client_height: node.client_height() as f64,
                parent_scroll_top,
                ..Layout::default()
            },
        }
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            log::warn!("add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            log::warn!("remove class {}: {:?}", class, e);
        }
    }

    fn create_tooltip(&mut self, template_id: &str, text: &str, at: Position) -> BoardResult<Element> {
        let template = self
            .document
            .get_element_by_id(template_id)
            .and_then(|el| el.dyn_into::<HtmlTemplateElement>().ok())
            .ok_or_else(|| BoardError::not_found(format!("template #{}", template_id)))?;
        let content = self.document.import_node_with_deep(&template.content(), true)?;

        let element = self.document.create_element("div")?;
        element.set_class_name("card");
        element.append_child(&content)?;

        let paragraph = element
            .query_selector("p")?
            .ok_or_else(|| BoardError::not_found(format!("paragraph in template #{}", template_id)))?;
        paragraph.set_text_content(Some(text));

        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("position", "absolute")?;
            style.set_property("left", &format!("{}px", at.x))?;
            style.set_property("top", &format!("{}px", at.y))?;
        }
        Ok(element)
    }

    fn on_click(&mut self, node: &Element, key: HandlerKey, event: BoardEvent) {
        self.retire(&key);
        let sink = self.sink.clone();
        let listener = EventListener::new(node, "click", move |_| {
            sink(event.clone());
        });
        self.handlers.insert(key, listener);
    }

    fn release(&mut self, key: &HandlerKey) {
        self.retire(key);
    }

    fn make_draggable(&mut self, card: &Element, id: &str) {
        if let Err(e) = card.set_attribute("draggable", "true") {
            log::warn!("card {} not draggable: {:?}", id, e);
        }
        let start_sink = self.sink.clone();
        let start_id = id.to_string();
        let end_sink = self.sink.clone();
        let end_id = id.to_string();
        let listeners = bind_draggable(
            self.dnd,
            card,
            id.to_string(),
            move || {
                start_sink(BoardEvent::DragStarted { id: start_id.clone() });
            },
            move |effect| {
                end_sink(BoardEvent::DragEnded { id: end_id.clone(), effect });
            },
        );
        self.drag_listeners.extend(listeners);
    }

    fn make_drop_target(&mut self, container: &Element, list: ListKind) {
        let sink = self.sink.clone();
        let listeners = bind_drop_zone(self.dnd, container, list.as_str().to_string(), move |event| {
            sink(match event {
                ZoneEvent::Enter { plain_text } => BoardEvent::DragEntered { list, plain_text },
                ZoneEvent::Over { plain_text } => BoardEvent::DragOver { list, plain_text },
                ZoneEvent::Leave { left_zone } => BoardEvent::DragLeft {
                    list,
                    left_container: left_zone,
                },
                ZoneEvent::Drop { payload } => BoardEvent::Dropped { list, payload },
            })
        });
        self.drag_listeners.extend(listeners);
    }

    fn alert(&mut self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("alert not shown: {}", message);
        }
    }
}
