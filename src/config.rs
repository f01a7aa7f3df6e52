//! Board Configuration
//!
//! Optional JSON block in the host page:
//! `<script type="application/json" id="board-config">{ ... }</script>`.
//! Every key is optional; omitted keys keep their defaults.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{BoardError, BoardResult};

/// Id of the `<script>` element carrying the configuration
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// `<template>` cloned for every tooltip
    pub tooltip_template_id: String,
    /// Card attribute holding the tooltip text
    pub extra_info_attribute: String,
    /// Class put on a list section while a valid drag hovers it
    pub droppable_class: String,
    /// Alert shown when a drag ends outside every list
    pub invalid_drop_message: String,
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
    /// Smooth-scroll moved cards into view
    pub smooth_scroll: bool,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Lines kept by the in-memory log
    pub log_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tooltip_template_id: "tooltip".to_string(),
            extra_info_attribute: "data-extra-info".to_string(),
            droppable_class: "droppable".to_string(),
            invalid_drop_message: "Please drag into right place!".to_string(),
            tooltip_offset_x: 20.0,
            tooltip_offset_y: 10.0,
            smooth_scroll: true,
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> BoardResult<Self> {
        serde_json::from_str(json).map_err(|e| BoardError::Config(e.to_string()))
    }

    /// Parse the page's config block; a blank block means defaults
    pub fn from_page_text(text: Option<&str>) -> BoardResult<Self> {
        match text.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
