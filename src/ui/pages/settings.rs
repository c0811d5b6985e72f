use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::persist_user_state,
    domain::{pricing::coerce_number, AppState, ExchangeRate, PricingPolicy, ProfitMode, Settings},
    ui::{
        components::{
            field::TextField,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::format::{age_label, timestamp},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.settings.clone());

    let mut rate_input = use_signal(|| initial.exchange_rate.to_string());
    let mut max_age_input = use_signal(|| initial.rate_max_age_hours.to_string());
    let mut shipping_input = use_signal(|| initial.pricing.shipping_per_kg.to_string());
    let mut threshold_input = use_signal(|| initial.pricing.duty_threshold.to_string());
    let mut duty_pct_input = use_signal(|| (initial.pricing.duty_rate * 100.0).to_string());
    let mut step_input = use_signal(|| initial.pricing.list_price_step.to_string());
    let mut profit_mode = use_signal(|| initial.pricing.profit_mode);

    let current = state.with(|st| st.settings.clone());
    let rate_age = current
        .rate_updated_at
        .map(|at| format!("{} ({})", timestamp(at), age_label(at, OffsetDateTime::now_utc())))
        .unwrap_or_else(|| "never confirmed".to_string());

    let on_apply = {
        let mut state = state;
        move |_| {
            let form = SettingsForm {
                rate: rate_input(),
                max_age_hours: max_age_input(),
                shipping_per_kg: shipping_input(),
                duty_threshold: threshold_input(),
                duty_percent: duty_pct_input(),
                list_price_step: step_input(),
                profit_mode: profit_mode(),
            };
            match form.parse(OffsetDateTime::now_utc()) {
                Ok(settings) => {
                    state.with_mut(|st| st.settings = settings);
                    persist_user_state(&state);
                    push_toast(toasts, ToastKind::Success, "Settings saved.");
                }
                Err(message) => {
                    push_toast(toasts, ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            let defaults = Settings::default();
            rate_input.set(defaults.exchange_rate.to_string());
            max_age_input.set(defaults.rate_max_age_hours.to_string());
            shipping_input.set(defaults.pricing.shipping_per_kg.to_string());
            threshold_input.set(defaults.pricing.duty_threshold.to_string());
            duty_pct_input.set((defaults.pricing.duty_rate * 100.0).to_string());
            step_input.set(defaults.pricing.list_price_step.to_string());
            profit_mode.set(defaults.pricing.profit_mode);
            state.with_mut(|st| st.settings = defaults);
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored default settings.");
        }
    };

    rsx! {
        div { class: "mx-auto max-w-4xl space-y-8 py-16",
            section { class: "{theme::PANEL}",
                h2 { class: "{theme::LABEL}", "Exchange Rate" }
                p { class: "mt-2 text-xs text-slate-400", "Last confirmed: {rate_age}" }
                div { class: "mt-4 grid gap-6 sm:grid-cols-2",
                    TextField { label: "USD → KRW", value: rate_input }
                    TextField { label: "Flag as stale after (hours)", value: max_age_input }
                }
            }

            section { class: "{theme::PANEL}",
                h2 { class: "{theme::LABEL}", "Pricing Policy" }
                div { class: "mt-4 grid gap-6 sm:grid-cols-2",
                    TextField { label: "Shipping per kg (KRW)", value: shipping_input }
                    TextField { label: "Duty threshold (USD)", value: threshold_input }
                    TextField { label: "Duty rate (%)", value: duty_pct_input }
                    TextField { label: "List price rounding step (KRW)", value: step_input }
                }
                div { class: "mt-6 space-y-2",
                    span { class: "{theme::LABEL}", "Net profit based on" }
                    div { class: "flex gap-3",
                        for mode in [ProfitMode::MarginApplied, ProfitMode::ListPrice] {
                            button {
                                class: mode_button_class(profit_mode() == mode),
                                onclick: move |_| profit_mode.set(mode),
                                "{mode.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "flex gap-3",
                button { class: "bg-slate-900 px-6 py-3 text-xs font-black tracking-widest text-white hover:bg-blue-600", onclick: on_apply, "APPLY" }
                button { class: "{theme::BTN_SECONDARY}", onclick: on_reset, "Reset Defaults" }
            }
        }
    }
}

fn mode_button_class(active: bool) -> &'static str {
    if active {
        "border border-blue-600 bg-blue-50 px-4 py-2 text-xs font-black uppercase tracking-widest text-blue-700"
    } else {
        theme::BTN_SECONDARY
    }
}

/// Raw text of the settings form.
struct SettingsForm {
    rate: String,
    max_age_hours: String,
    shipping_per_kg: String,
    duty_threshold: String,
    duty_percent: String,
    list_price_step: String,
    profit_mode: ProfitMode,
}

impl SettingsForm {
    /// Validates the form. Applying it confirms the rate as of `now`.
    fn parse(&self, now: OffsetDateTime) -> Result<Settings, String> {
        let rate = coerce_number("exchange rate", &self.rate).map_err(|err| err.to_string())?;
        ExchangeRate::new(rate).map_err(|err| err.to_string())?;

        let max_age_hours: u32 = self
            .max_age_hours
            .trim()
            .parse()
            .map_err(|_| "Stale threshold must be a whole number of hours")?;

        let shipping_per_kg =
            coerce_number("shipping per kg", &self.shipping_per_kg).map_err(|err| err.to_string())?;
        let duty_threshold =
            coerce_number("duty threshold", &self.duty_threshold).map_err(|err| err.to_string())?;
        let duty_percent =
            coerce_number("duty rate", &self.duty_percent).map_err(|err| err.to_string())?;
        if shipping_per_kg < 0.0 || duty_threshold < 0.0 || duty_percent < 0.0 {
            return Err("Pricing values cannot be negative".to_string());
        }

        let list_price_step: i64 = self
            .list_price_step
            .trim()
            .parse()
            .map_err(|_| "Rounding step must be a whole number")?;
        if list_price_step <= 0 {
            return Err("Rounding step must be positive".to_string());
        }

        Ok(Settings {
            exchange_rate: rate,
            rate_updated_at: Some(now),
            rate_max_age_hours: max_age_hours,
            pricing: PricingPolicy {
                shipping_per_kg,
                duty_threshold,
                duty_rate: duty_percent / 100.0,
                list_price_step,
                profit_mode: self.profit_mode,
            },
        })
    }
}
