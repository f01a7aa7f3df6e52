//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos using native drag events.
//! Payloads travel as `text/plain`; listeners unsubscribe when dropped.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, EventTarget};

/// Transfer type carried by every drag
pub const TRANSFER_TYPE: &str = "text/plain";

/// Effect allowed on drag start
const EFFECT_ALLOWED: &str = "move";

/// Drop effect reported by the browser when a drag ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropEffect {
    /// Nothing accepted the drop
    #[default]
    None,
    Copy,
    Link,
    Move,
}

impl DropEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropEffect::None => "none",
            DropEffect::Copy => "copy",
            DropEffect::Link => "link",
            DropEffect::Move => "move",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "copy" => DropEffect::Copy,
            "link" => DropEffect::Link,
            "move" => DropEffect::Move,
            _ => DropEffect::None,
        }
    }

    /// Whether some target accepted the drop
    pub fn dropped(&self) -> bool {
        *self != DropEffect::None
    }
}

/// Drag activity over a drop zone
#[derive(Clone, Debug, PartialEq)]
pub enum ZoneEvent {
    Enter { plain_text: bool },
    Over { plain_text: bool },
    /// `left_zone` is false while moving between children of the zone
    Leave { left_zone: bool },
    Drop { payload: Option<String> },
}

/// A DOM event listener that is removed when dropped
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    /// Listener that only fires for `DragEvent`s
    pub fn on_drag<F>(target: &EventTarget, event: &'static str, mut callback: F) -> Self
    where
        F: FnMut(DragEvent) + 'static,
    {
        Self::new(target, event, move |ev: Event| {
            if let Ok(ev) = ev.dyn_into::<DragEvent>() {
                callback(ev);
            }
        })
    }

    /// Stop receiving events while keeping the closure alive, for listeners
    /// that may still be on the call stack
    pub fn unsubscribe(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Payload of the element being dragged
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Zone currently under the pointer
    pub hovered_zone_read: ReadSignal<Option<String>>,
    pub hovered_zone_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (hovered_zone_read, hovered_zone_write) = signal(None::<String>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hovered_zone_read,
        hovered_zone_write,
    }
}

/// Whether the first advertised transfer type is plain text
pub fn is_plain_text<S: AsRef<str>>(types: &[S]) -> bool {
    types
        .first()
        .map(|t| t.as_ref() == TRANSFER_TYPE)
        .unwrap_or(false)
}

/// Transfer types advertised by the drag
pub fn transfer_types(ev: &DragEvent) -> Vec<String> {
    ev.data_transfer()
        .map(|dt| dt.types().iter().filter_map(|t| t.as_string()).collect())
        .unwrap_or_default()
}

/// Store the payload and allow moving
pub fn start_transfer(ev: &DragEvent, payload: &str) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data(TRANSFER_TYPE, payload);
        dt.set_effect_allowed(EFFECT_ALLOWED);
    }
}

/// Read the plain-text payload (None when empty or missing)
pub fn read_transfer(ev: &DragEvent) -> Option<String> {
    ev.data_transfer()?
        .get_data(TRANSFER_TYPE)
        .ok()
        .filter(|payload| !payload.is_empty())
}

pub fn drop_effect(ev: &DragEvent) -> DropEffect {
    ev.data_transfer()
        .map(|dt| DropEffect::from_str(&dt.drop_effect()))
        .unwrap_or_default()
}

/// True when the pointer went somewhere outside `zone` (or out of the page)
pub fn left_zone(ev: &DragEvent, zone: &Element) -> bool {
    match ev
        .related_target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
    {
        Some(node) => !zone.contains(Some(&node)),
        None => true,
    }
}

/// Make an element draggable with the plain-text protocol.
/// `on_start` runs once the payload is set, `on_end` receives the drop
/// effect once the drag finishes.
pub fn bind_draggable<S, F>(
    dnd: DndSignals,
    el: &Element,
    payload: String,
    on_start: S,
    on_end: F,
) -> Vec<EventListener>
where
    S: Fn() + 'static,
    F: Fn(DropEffect) + 'static,
{
    let on_dragstart = EventListener::on_drag(el, "dragstart", move |ev: DragEvent| {
        start_transfer(&ev, &payload);
        dnd.dragging_id_write.set(Some(payload.clone()));
        on_start();
    });

    let on_dragend = EventListener::on_drag(el, "dragend", move |ev: DragEvent| {
        dnd.dragging_id_write.set(None);
        dnd.hovered_zone_write.set(None);
        on_end(drop_effect(&ev));
    });

    vec![on_dragstart, on_dragend]
}

/// Turn an element into a drop zone.
/// `on_event` returns true when the browser default must be prevented,
/// which is what allows the drop to happen.
pub fn bind_drop_zone<F>(dnd: DndSignals, el: &Element, zone: String, on_event: F) -> Vec<EventListener>
where
    F: Fn(ZoneEvent) -> bool + 'static,
{
    let on_event = Rc::new(on_event);

    let handler = on_event.clone();
    let enter_zone = zone.clone();
    let on_dragenter = EventListener::on_drag(el, "dragenter", move |ev: DragEvent| {
        let plain_text = is_plain_text(&transfer_types(&ev));
        if handler(ZoneEvent::Enter { plain_text }) {
            ev.prevent_default();
            dnd.hovered_zone_write.set(Some(enter_zone.clone()));
        }
    });

    let handler = on_event.clone();
    let on_dragover = EventListener::on_drag(el, "dragover", move |ev: DragEvent| {
        let plain_text = is_plain_text(&transfer_types(&ev));
        if handler(ZoneEvent::Over { plain_text }) {
            ev.prevent_default();
        }
    });

    let handler = on_event.clone();
    let zone_el = el.clone();
    let on_dragleave = EventListener::on_drag(el, "dragleave", move |ev: DragEvent| {
        let left = left_zone(&ev, &zone_el);
        if left && dnd.hovered_zone_read.get_untracked().as_deref() == Some(zone.as_str()) {
            dnd.hovered_zone_write.set(None);
        }
        handler(ZoneEvent::Leave { left_zone: left });
    });

    let handler = on_event;
    let on_drop = EventListener::on_drag(el, "drop", move |ev: DragEvent| {
        let payload = read_transfer(&ev);
        dnd.hovered_zone_write.set(None);
        if handler(ZoneEvent::Drop { payload }) {
            ev.prevent_default();
        }
    });

    vec![on_dragenter, on_dragover, on_dragleave, on_drop]
}
