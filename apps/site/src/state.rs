//! Global application state using Dioxus signals.

use std::rc::Rc;

use dioxus::prelude::*;
use laulik_core::anchor::AnchorRegistry;
use laulik_core::types::WidgetConfig;

/// Widget configuration, taken from `INITIAL_CONFIG` on first read, defaults otherwise.
pub static CONFIG: GlobalSignal<WidgetConfig> = Signal::global(|| {
    crate::INITIAL_CONFIG.lock().ok().and_then(|mut slot| slot.take()).unwrap_or_default()
});

/// Smooth-scroll targets, filled as anchored sections mount.
pub static ANCHORS: GlobalSignal<AnchorRegistry<Rc<MountedData>>> =
    Signal::global(AnchorRegistry::new);

/// The page's scroll container; its client rect is the viewport cards reveal against.
pub static SCROLL_ROOT: GlobalSignal<Option<Rc<MountedData>>> = Signal::global(|| None);

/// Bumped on every scroll of the page container so unrevealed cards re-check their position.
pub static SCROLL_TICK: GlobalSignal<u64> = Signal::global(|| 0);
