use dioxus::prelude::*;

use crate::{
    domain::{AppState, PricingBreakdown, PricingInput, RateProvider, RateQuote, RateSource},
    ui::{
        components::{field::TextField, kpi_card::KpiCard},
        theme::{self, Tone},
    },
    util::format::krw,
};

#[component]
pub fn SimulatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let initial = state.with(|st| st.pricing_input);
    let source_input = use_signal(|| initial.source_price_units.to_string());
    let weight_input = use_signal(|| initial.weight_kg.to_string());
    let margin_input = use_signal(|| initial.margin_percent.to_string());

    let parsed = PricingInput::from_fields(&source_input(), &weight_input(), &margin_input());

    // Keep the last valid input on the shared state so it survives navigation.
    use_effect(move || {
        if let Ok(input) =
            PricingInput::from_fields(&source_input(), &weight_input(), &margin_input())
        {
            state.with_mut(|st| st.pricing_input = input);
        }
    });

    let settings = state.with(|st| st.settings.clone());
    let quote = settings.rate_provider().quote();
    let outcome = parsed.and_then(|input| settings.simulate(&input));

    let rate_note = rate_note(&quote);
    let duty_threshold = settings.pricing.duty_threshold;
    let duty_pct = settings.pricing.duty_rate * 100.0;

    rsx! {
        section { class: "mx-auto max-w-5xl py-16",
            div { class: "grid grid-cols-1 gap-16 md:grid-cols-2",
                div { class: "space-y-8",
                    h2 { class: "text-3xl font-black tracking-tighter", "Profit Simulation" }
                    p { class: "text-xs font-bold uppercase tracking-widest text-slate-400", "{rate_note}" }
                    div { class: "space-y-6",
                        TextField { label: "Source Price (USD)", value: source_input, numeric: true }
                        TextField { label: "Weight (KG)", value: weight_input, numeric: true }
                        TextField { label: "Target Margin (%)", value: margin_input, numeric: true }
                    }
                }
                match outcome {
                    Ok(breakdown) => rsx! {
                        ResultPanel { breakdown, duty_threshold, duty_pct }
                    },
                    Err(err) => rsx! {
                        div { class: "{theme::PANEL_MUTED} flex items-center",
                            p { class: "text-sm font-bold {Tone::Negative.text()}", "{err}" }
                        }
                    },
                }
            }
        }
    }
}

fn rate_note(quote: &RateQuote) -> String {
    match (quote.source, quote.stale) {
        (RateSource::Fallback, _) => "Configured rate unusable, default applied".to_string(),
        (_, true) => format!("USD/KRW {} (stale, update in Settings)", quote.rate),
        (_, false) => format!("USD/KRW {}", quote.rate),
    }
}

#[component]
fn ResultPanel(breakdown: PricingBreakdown, duty_threshold: f64, duty_pct: f64) -> Element {
    let result = breakdown.result;
    let duty_line = if breakdown.duty_applied() {
        format!("Duty {duty_pct:.0}% applied: {}", krw(breakdown.duty_local.round() as i64))
    } else {
        format!("No duty (source price ≤ ${duty_threshold})")
    };
    let composition = format!(
        "Base {} + shipping {}",
        krw(breakdown.base_local.round() as i64),
        krw(breakdown.shipping_local.round() as i64)
    );

    rsx! {
        div { class: "space-y-4",
            KpiCard {
                title: "Estimated Landed Cost".to_string(),
                value: krw(result.landed_cost_local),
                description: Some(composition),
                tone: Tone::Neutral,
            }
            KpiCard {
                title: "Recommended List Price".to_string(),
                value: krw(result.recommended_list_price_local),
                description: Some(duty_line),
                tone: Tone::Accent,
            }
            KpiCard {
                title: "Expected Net Profit".to_string(),
                value: krw(result.net_profit_local),
                description: None,
                tone: Tone::for_amount(result.net_profit_local),
            }
            p { class: "text-[9px] font-bold uppercase leading-relaxed text-slate-500",
                "* Includes: FX conversion, shipping (est.), duties (if > ${duty_threshold})."
                br {}
                "* Excludes: marketplace commission, domestic return insurance."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime};

    use super::*;
    use crate::domain::Settings;

    #[test]
    fn rate_note_reflects_configured_quote() {
        let confirmed = OffsetDateTime::now_utc() - Duration::hours(1);
        let settings = Settings {
            exchange_rate: 1412.5,
            rate_updated_at: Some(confirmed),
            ..Settings::default()
        };
        assert_eq!(rate_note(&settings.rate_provider().quote()), "USD/KRW 1412.50");

        let unconfirmed = Settings::default();
        assert_eq!(
            rate_note(&unconfirmed.rate_provider().quote()),
            "USD/KRW 1350 (stale, update in Settings)"
        );
    }

    #[test]
    fn rate_note_flags_fallback() {
        let broken = Settings {
            exchange_rate: -1.0,
            ..Settings::default()
        };
        assert_eq!(
            rate_note(&broken.rate_provider().quote()),
            "Configured rate unusable, default applied"
        );
    }
}
