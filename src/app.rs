//! Project Board App
//!
//! Starts the board on the server-rendered lists and mounts the status bar.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::board::Board;
use crate::components::BoardStatus;
use crate::config::BoardConfig;
use crate::dom::{EventSink, WebDom};
use crate::error::BoardResult;
use crate::models::BoardEvent;
use crate::store::{store_sync, AppStore, BoardState};

/// Owns the page adapter and the board once started
#[derive(Clone, Copy)]
pub struct BoardRuntime {
    dom: StoredValue<Option<WebDom>, LocalStorage>,
    board: StoredValue<Option<Board<WebDom>>, LocalStorage>,
    store: AppStore,
}

impl BoardRuntime {
    pub fn new(store: AppStore) -> Self {
        Self {
            dom: StoredValue::new_local(None),
            board: StoredValue::new_local(None),
            store,
        }
    }

    /// Adopt the lists in the page and start listening
    pub fn start(self, config: BoardConfig, dnd: DndSignals) -> BoardResult<()> {
        let sink: EventSink = Rc::new(move |event: BoardEvent| self.dispatch(event));
        let mut dom = WebDom::new(sink, dnd)?;
        let board = Board::init(&mut dom, config)?;
        store_sync(&self.store, &board);
        self.dom.set_value(Some(dom));
        self.board.set_value(Some(board));
        log::info!("board started");
        Ok(())
    }

    /// Hand one page event to the board. Returns whether the browser default
    /// must be prevented.
    pub fn dispatch(self, event: BoardEvent) -> bool {
        let store = self.store;
        let reaction = self
            .board
            .try_update_value(|board| {
                let board = board.as_mut()?;
                self.dom
                    .try_update_value(|dom| {
                        let dom = dom.as_mut()?;
                        dom.drop_retired();
                        let reaction = board.react(dom, event);
                        store_sync(&store, board);
                        Some(reaction)
                    })
                    .flatten()
            })
            .flatten();

        let Some(reaction) = reaction else {
            log::warn!("event before the board started");
            return false;
        };

        // Both values are released here, the click re-enters `dispatch`
        if let Some(target) = reaction.click {
            match target.dyn_ref::<HtmlElement>() {
                Some(button) => button.click(),
                None => log::warn!("switch button is not clickable"),
            }
        }
        reaction.prevent_default
    }
}

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);
    let dnd = create_dnd_signals();

    let failure = match BoardRuntime::new(store).start(config, dnd) {
        Ok(()) => None,
        Err(e) => {
            log::error!("board not started: {}", e);
            Some(e.to_string())
        }
    };

    view! {
        <BoardStatus dnd=dnd failure=failure />
    }
}
