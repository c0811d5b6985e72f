use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, tone: Tone) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL}",
            h3 { class: "{theme::LABEL}", "{title}" }
            p { class: "mt-2 text-3xl font-black tracking-tighter {tone.text()}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs text-slate-400", "{desc}" }
            }
        }
    }
}
