//! Search input; every change goes straight to the widget, which debounces.

use dioxus::prelude::*;
use laulik_core::widget::Msg;

use super::SearchRuntime;

#[component]
pub fn SearchInput() -> Element {
    let runtime = use_context::<SearchRuntime>();
    let mut value = use_signal(String::new);

    rsx! {
        div {
            class: "search-field",

            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                id: "search-input",
                class: "search-input",
                r#type: "text",
                placeholder: "Otsi uudiseid, sündmusi, kultuuri...",
                autocomplete: "off",
                value: "{value}",
                oninput: move |e: Event<FormData>| {
                    let text = e.value();
                    value.set(text.clone());
                    runtime.dispatch(Msg::Input(text));
                },
            }
        }
    }
}
