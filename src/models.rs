//! Board Models
//!
//! Plain data shared by the board, the DOM adapter and the UI.

use leptos_dragdrop::DropEffect;

/// Which list a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Active, ListKind::Finished];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Active => "active",
            ListKind::Finished => "finished",
        }
    }

    /// The list a card moves to when switched
    pub fn other(&self) -> Self {
        match self {
            ListKind::Active => ListKind::Finished,
            ListKind::Finished => ListKind::Active,
        }
    }

    /// Label of the switch button for cards in this list
    pub fn switch_label(&self) -> &'static str {
        match self {
            ListKind::Active => "Finish",
            ListKind::Finished => "Activate",
        }
    }

    /// Id of the `<section>` holding this list
    pub fn section_id(&self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Selector of the `<ul>` cards live in
    pub fn container_selector(&self) -> String {
        format!("#{} ul", self.section_id())
    }

    /// Selector matching every card of this list
    pub fn card_selector(&self) -> String {
        format!("#{} li", self.section_id())
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two buttons every card carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardButton {
    /// First button, opens the tooltip
    MoreInfo,
    /// Last button, moves the card to the other list
    Switch,
}

/// Click handler slots owned by a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerSlot {
    MoreInfo,
    Switch,
    Tooltip,
}

/// Stable key of a registered click handler. Binding a key again replaces
/// the previous handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    pub card_id: String,
    pub slot: HandlerSlot,
}

impl HandlerKey {
    pub fn new(card_id: &str, slot: HandlerSlot) -> Self {
        Self {
            card_id: card_id.to_string(),
            slot,
        }
    }
}

/// One user interaction, as delivered to the board
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    MoreInfoClicked { id: String },
    /// `list` is the switch handler bound when the button was wired
    SwitchClicked { list: ListKind, id: String },
    TooltipClicked { id: String },
    DragStarted { id: String },
    DragEnded { id: String, effect: DropEffect },
    DragEntered { list: ListKind, plain_text: bool },
    DragOver { list: ListKind, plain_text: bool },
    DragLeft { list: ListKind, left_container: bool },
    Dropped { list: ListKind, payload: Option<String> },
}

/// What the listener must do once the board handled an event
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction<N> {
    /// Call `preventDefault()` (accepts a drag)
    pub prevent_default: bool,
    /// Node to click after the board is released
    pub click: Option<N>,
}

impl<N> Default for Reaction<N> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            click: None,
        }
    }
}

impl<N> Reaction<N> {
    pub fn accept() -> Self {
        Self {
            prevent_default: true,
            click: None,
        }
    }
}

/// Layout metrics of an element, in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Layout {
    pub offset_left: f64,
    pub offset_top: f64,
    pub client_height: f64,
    /// Scroll offset of the element's parent
    pub parent_scroll_top: f64,
}

/// Absolute page position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}
