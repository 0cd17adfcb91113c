//! Debounced search widget as a message-driven state machine.
//!
//! The widget never touches timers or the network itself. [`SearchWidget::handle`]
//! takes a [`Msg`] describing what happened and returns the [`Effect`]s the
//! runtime must carry out; timer expiry and fetch outcomes come back as messages.
//!
//! ```text
//! Idle ──input≥min──▶ Debouncing ──timer──▶ Loading ──response──▶ Showing
//!   ▲                     │  ▲                  │                    │
//!   └──────input<min──────┘  └───────────input≥min──────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, error};

use crate::client::SearchError;
use crate::render::{render_results, Panel};
use crate::types::{SearchResult, WidgetConfig};

/// Identifies one debounce timer. Only the most recent ticket may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket(u64);

/// Issue order of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Loading,
    Showing,
}

#[derive(Debug)]
pub enum Msg {
    /// Raw value of the input after any change.
    Input(String),
    TimerElapsed(TimerTicket),
    Response { seq: RequestSeq, outcome: Result<Vec<SearchResult>, SearchError> },
    /// A click that landed outside both the input and the results container.
    OutsideClick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CancelTimer(TimerTicket),
    StartTimer { ticket: TimerTicket, delay: Duration },
    Fetch { seq: RequestSeq, query: String },
}

pub struct SearchWidget {
    debounce: Duration,
    min_query_chars: usize,
    snippet_chars: usize,

    phase: Phase,
    panel: Panel,
    visible: bool,

    pending: Option<(TimerTicket, String)>,
    next_ticket: u64,
    next_seq: u64,
    /// Responses issued before this sequence number are dropped (set when the box is cleared).
    accept_from: u64,
    displayed: Option<RequestSeq>,
}

impl Default for SearchWidget {
    fn default() -> Self {
        Self::new(&WidgetConfig::default())
    }
}

impl SearchWidget {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            min_query_chars: config.min_query_chars,
            snippet_chars: config.snippet_chars,
            phase: Phase::Idle,
            panel: Panel::Blank,
            visible: false,
            pending: None,
            next_ticket: 0,
            next_seq: 0,
            accept_from: 0,
            displayed: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Whether the results container carries its `show` state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Query waiting for its debounce timer, if any.
    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|(_, q)| q.as_str())
    }

    pub fn handle(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Input(raw) => self.on_input(&raw),
            Msg::TimerElapsed(ticket) => self.on_timer(ticket),
            Msg::Response { seq, outcome } => {
                self.on_response(seq, outcome);
                Vec::new()
            }
            Msg::OutsideClick => {
                self.visible = false;
                if self.phase == Phase::Showing {
                    self.phase = Phase::Idle;
                }
                Vec::new()
            }
        }
    }

    fn on_input(&mut self, raw: &str) -> Vec<Effect> {
        let query = raw.trim();
        let mut effects: Vec<Effect> =
            self.pending.take().map(|(ticket, _)| Effect::CancelTimer(ticket)).into_iter().collect();

        if query.chars().count() < self.min_query_chars {
            self.phase = Phase::Idle;
            self.panel = Panel::Blank;
            self.visible = false;
            self.accept_from = self.next_seq;
            return effects;
        }

        let ticket = TimerTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some((ticket, query.to_string()));
        self.phase = Phase::Debouncing;
        debug!(query, ?ticket, "Debouncing search");

        effects.push(Effect::StartTimer { ticket, delay: self.debounce });
        effects
    }

    fn on_timer(&mut self, ticket: TimerTicket) -> Vec<Effect> {
        let query = match self.pending.take() {
            Some((current, query)) if current == ticket => query,
            other => {
                self.pending = other;
                debug!(?ticket, "Superseded debounce timer ignored");
                return Vec::new();
            }
        };

        let seq = RequestSeq(self.next_seq);
        self.next_seq += 1;
        self.phase = Phase::Loading;
        self.panel = Panel::Loading;
        self.visible = true;

        vec![Effect::Fetch { seq, query }]
    }

    fn on_response(&mut self, seq: RequestSeq, outcome: Result<Vec<SearchResult>, SearchError>) {
        if let Err(e) = &outcome {
            error!(error = %e, ?seq, "Search error");
        }

        if seq.0 < self.accept_from {
            debug!(?seq, "Dropping response for a cleared search box");
            return;
        }
        if self.displayed.is_some_and(|shown| seq < shown) {
            debug!(?seq, "Dropping response older than the one on screen");
            return;
        }

        self.displayed = Some(seq);
        self.panel = match outcome {
            Ok(results) => render_results(&results, self.snippet_chars),
            Err(_) => Panel::Error,
        };

        let newest = seq.0 + 1 == self.next_seq;
        if newest && self.phase == Phase::Loading {
            self.phase = Phase::Showing;
        }
    }
}
