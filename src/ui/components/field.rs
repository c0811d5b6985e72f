use dioxus::prelude::*;

use crate::ui::theme;

/// Labelled single-line input bound to a string signal.
#[component]
pub fn TextField(label: &'static str, value: Signal<String>, numeric: Option<bool>) -> Element {
    let mut value = value;
    let class = if numeric.unwrap_or(false) {
        theme::INPUT_NUMBER
    } else {
        theme::INPUT_TEXT
    };

    rsx! {
        div { class: "space-y-2",
            label { class: "{theme::LABEL}", "{label}" }
            input {
                class: "{class}",
                value: value(),
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

/// Labelled multi-line input bound to a string signal.
#[component]
pub fn TextAreaField(label: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        div { class: "space-y-2",
            label { class: "{theme::LABEL}", "{label}" }
            textarea {
                class: "{theme::INPUT_AREA}",
                value: value(),
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}
