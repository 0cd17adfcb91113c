//! Search panel: input field + results dropdown, driven by the core widget.
//!
//! [`SearchRuntime`] owns the widget and carries out its effects: debounce
//! timers become spawned tasks, fetches go through the shared `SearchClient`,
//! and both report back by dispatching another message.

mod results_list;
mod search_input;

use dioxus::core::Task;
use dioxus::prelude::*;
use laulik_core::client::SearchClient;
use laulik_core::widget::{Effect, Msg, SearchWidget};
use results_list::ResultsList;
use search_input::SearchInput;
use tracing::debug;

use crate::state::CONFIG;

#[derive(Clone, Copy)]
pub struct SearchRuntime {
    pub widget: Signal<SearchWidget>,
    timer: Signal<Option<Task>>,
    client: Signal<SearchClient>,
}

impl SearchRuntime {
    /// Must be called from a component scope (it creates signals).
    pub fn new() -> Self {
        let config = CONFIG.read().clone();
        Self {
            widget: Signal::new(SearchWidget::new(&config)),
            timer: Signal::new(None),
            client: Signal::new(SearchClient::new(&config)),
        }
    }

    pub fn dispatch(mut self, msg: Msg) {
        let effects = self.widget.write().handle(msg);
        for effect in effects {
            match effect {
                Effect::CancelTimer(ticket) => {
                    if let Some(task) = self.timer.write().take() {
                        debug!(?ticket, "Cancelling debounce timer");
                        task.cancel();
                    }
                }
                Effect::StartTimer { ticket, delay } => {
                    let task = spawn(async move {
                        tokio::time::sleep(delay).await;
                        self.dispatch(Msg::TimerElapsed(ticket));
                    });
                    self.timer.set(Some(task));
                }
                Effect::Fetch { seq, query } => {
                    // The timer that got us here has finished.
                    self.timer.set(None);
                    let client = self.client.read().clone();
                    spawn(async move {
                        let outcome = client.search(&query).await;
                        self.dispatch(Msg::Response { seq, outcome });
                    });
                }
            }
        }
    }
}

/// Search box with its dropdown. Clicks inside stop here so the page-level
/// handler only ever sees clicks from outside.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            onclick: move |e: MouseEvent| e.stop_propagation(),
            SearchInput {}
            ResultsList {}
        }
    }
}
