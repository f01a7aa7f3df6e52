//! UI Components
//!
//! Leptos components mounted next to the board.

mod board_status;

pub use board_status::BoardStatus;
