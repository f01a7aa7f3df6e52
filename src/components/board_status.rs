//! Board Status Bar
//!
//! Card counts, open tooltips, the card being dragged, and the recent log.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::store::{store_counts, store_open_tooltips, use_app_store};

#[component]
pub fn BoardStatus(
    dnd: DndSignals,
    /// Startup error, shown instead of the counts
    failure: Option<String>,
) -> impl IntoView {
    let store = use_app_store();
    let (show_log, set_show_log) = signal(false);
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());

    let toggle_log = move |_| {
        let show = !show_log.get_untracked();
        if show {
            set_log_lines.set(rolling_logger::recent_lines());
        }
        set_show_log.set(show);
    };

    let summary = move || {
        let (active, finished) = store_counts(&store);
        format!("{} active, {} finished", active, finished)
    };
    let tooltips = move || match store_open_tooltips(&store) {
        0 => String::new(),
        1 => "1 tooltip open".to_string(),
        n => format!("{} tooltips open", n),
    };
    let moving = move || match (dnd.dragging_id_read.get(), dnd.hovered_zone_read.get()) {
        (Some(id), Some(zone)) => format!("Moving {} over {}", id, zone),
        (Some(id), None) => format!("Moving {}", id),
        _ => String::new(),
    };

    view! {
        <footer class="board-status">
            {match failure {
                Some(message) => view! { <p class="board-error">{message}</p> }.into_any(),
                None => view! {
                    <p class="board-summary">
                        <span>{summary}</span>
                        " "
                        <span class="board-tooltips">{tooltips}</span>
                        " "
                        <span class="board-moving">{moving}</span>
                    </p>
                }.into_any(),
            }}
            <button class="board-log-toggle" on:click=toggle_log>
                {move || if show_log.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || show_log.get()>
                <pre class="board-log">
                    {move || log_lines.get().join("\n")}
                </pre>
            </Show>
        </footer>
    }
}
