use dioxus::prelude::*;

use crate::{
    domain::{AppState, PromptTemplateConfig},
    infra::clipboard::{ExportSink, WebviewClipboard},
    ui::{
        components::{
            field::{TextAreaField, TextField},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

fn edited_template(role: &str, goal: &str, rules: &str, structure: &str) -> PromptTemplateConfig {
    PromptTemplateConfig {
        role: role.to_string(),
        goal: goal.to_string(),
        rules: rules.to_string(),
        structure: structure.to_string(),
    }
}

#[component]
pub fn StudioPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.template.clone());
    let role = use_signal(|| initial.role.clone());
    let goal = use_signal(|| initial.goal.clone());
    let rules = use_signal(|| initial.rules.clone());
    let structure = use_signal(|| initial.structure.clone());

    // Keep edits on the shared state so they survive navigation.
    use_effect({
        let mut state = state;
        move || {
            let template = edited_template(&role(), &goal(), &rules(), &structure());
            state.with_mut(|st| st.template = template);
        }
    });

    let composed = state.with(|st| st.composed.clone());

    let on_construct = {
        let mut state = state;
        move |_| {
            let chars = state.with_mut(|st| st.compose().char_count());
            tracing::info!(chars, "composed listing prompt");
        }
    };

    let on_copy = move |_| {
        let Some(prompt) = state.with(|st| st.composed.clone()) else {
            return;
        };
        spawn(async move {
            match WebviewClipboard.export(&prompt).await {
                Ok(()) => push_toast(toasts, ToastKind::Success, "Copied!"),
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard export failed");
                    push_toast(toasts, ToastKind::Error, format!("Copy failed: {err}"));
                }
            }
        });
    };

    rsx! {
        section { class: "mx-auto max-w-7xl py-16",
            div { class: "flex flex-col gap-px border border-slate-100 bg-slate-100 md:flex-row",
                div { class: "space-y-10 bg-white p-12 md:w-1/2",
                    header {
                        h2 { class: "mb-2 text-3xl font-black", "AI Listing Studio" }
                        p { class: "text-sm text-slate-400", "네이버 스마트스토어 전용 상품 가공 엔진" }
                    }
                    div { class: "space-y-6",
                        TextField { label: "Expert Persona", value: role }
                        TextField { label: "Listing Goal", value: goal }
                        TextAreaField { label: "Constraints & Strategy", value: rules }
                        TextAreaField { label: "Output Blueprint", value: structure }
                    }
                    button { class: "{theme::BTN_PRIMARY}", onclick: on_construct, "CONSTRUCT PROMPT" }
                }
                div { class: "bg-slate-50 p-12 md:w-1/2",
                    div { class: "flex h-full flex-col",
                        div { class: "mb-6 flex items-center justify-between",
                            span { class: "{theme::LABEL}", "System Output" }
                            if composed.is_some() {
                                button { class: "{theme::BTN_LINK}", onclick: on_copy, "COPY ALL" }
                            }
                        }
                        div { class: "max-h-[600px] flex-1 overflow-y-auto border border-slate-200 bg-white p-8 shadow-inner",
                            if let Some(prompt) = composed {
                                pre { class: "prompt-output text-sm leading-relaxed text-slate-700", "{prompt}" }
                                p { class: "mt-4 text-[10px] font-bold uppercase tracking-widest text-slate-400",
                                    "{prompt.char_count()} chars"
                                }
                            } else {
                                div { class: "flex h-full flex-col items-center justify-center text-center italic opacity-30",
                                    p { "설정을 입력하고 버튼을 클릭하면" }
                                    p { "최적화된 프롬프트가 여기에 생성됩니다." }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_stored_before_compose_are_used_later() {
        let mut state = AppState::default();
        state.template = edited_template("Outlet buyer", "Sell shoes", "- short", "1. Title");

        // A fresh page mount starts from the stored template.
        let remounted = state.template.clone();
        assert_eq!(remounted.role, "Outlet buyer");
        assert_eq!(remounted.structure, "1. Title");

        let prompt = state.compose().clone();
        assert!(prompt.as_str().starts_with("# [SYSTEM ROLE]: Outlet buyer\n# [GOAL]: Sell shoes"));
        assert!(prompt.as_str().contains("# [OPERATIONAL RULES]:\n- short\n"));
    }
}
