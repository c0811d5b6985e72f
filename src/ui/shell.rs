use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::version_label;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let quote = state.with(|st| st.rate_quote());
    let rate_class = theme::Tone::for_rate(quote.stale).text();
    let rate_suffix = if quote.stale { " (stale)" } else { "" };

    rsx! {
        div { class: "flex min-h-screen flex-col font-sans",
            header {
                class: "sticky top-0 z-50 flex items-center justify-between border-b border-slate-100 bg-white px-8 py-5",
                div { class: "flex items-center gap-12",
                    h1 { class: "flex items-center gap-2 text-xl font-black tracking-tighter text-blue-900",
                        div { class: "h-8 w-2 bg-blue-600" }
                        "GLOBAL SOURCE HUB"
                    }
                    nav { class: "flex gap-8",
                        NavButton { active: matches!(current_route, Route::Studio {}), onclick: move |_| { nav.push(Route::Studio {}); }, label: "AI Listing Center" }
                        NavButton { active: matches!(current_route, Route::Simulator {}), onclick: move |_| { nav.push(Route::Simulator {}); }, label: "Margin Simulator" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "Settings" }
                    }
                }
                div { class: "rounded-full bg-slate-100 px-3 py-1 text-[10px] font-bold text-slate-600",
                    "USD/KRW: "
                    span { class: "{rate_class}", "{quote.rate}{rate_suffix}" }
                }
            }
            main { class: "flex-1 px-8",
                {children}
            }
            footer { class: "border-t border-slate-100 px-8 py-8",
                div { class: "mx-auto flex max-w-7xl items-center justify-between text-[10px] font-black uppercase tracking-widest text-slate-400",
                    p { "AI-driven global commerce tools for professional sellers." }
                    p { "{version_label()}" }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
