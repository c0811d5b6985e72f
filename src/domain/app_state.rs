use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{
    pricing::{price_breakdown, InvalidInputError, PricingBreakdown, PricingInput, PricingPolicy},
    prompt::{compose_prompt, ComposedPrompt, PromptTemplateConfig},
    rate::{
        ConfiguredRate, RateProvider, RateQuote, RateSource, DEFAULT_EXCHANGE_RATE,
        DEFAULT_RATE_MAX_AGE_HOURS,
    },
};

/// User-editable configuration. This is the only state written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub exchange_rate: f64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub rate_updated_at: Option<OffsetDateTime>,
    #[serde(default = "default_max_age")]
    pub rate_max_age_hours: u32,
    #[serde(default)]
    pub pricing: PricingPolicy,
}

fn default_max_age() -> u32 {
    DEFAULT_RATE_MAX_AGE_HOURS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            rate_updated_at: None,
            rate_max_age_hours: DEFAULT_RATE_MAX_AGE_HOURS,
            pricing: PricingPolicy::default(),
        }
    }
}

impl Settings {
    pub fn rate_provider(&self) -> ConfiguredRate {
        ConfiguredRate::new(
            self.exchange_rate,
            self.rate_updated_at,
            self.rate_max_age_hours,
        )
    }

    /// Runs the pricing engine with the configured rate and policy.
    pub fn simulate(&self, input: &PricingInput) -> Result<PricingBreakdown, InvalidInputError> {
        let rate = self.rate_provider().current_rate();
        price_breakdown(&self.pricing, input, rate)
    }
}

/// State owned by the UI and passed by value into the engines.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub pricing_input: PricingInput,
    pub template: PromptTemplateConfig,
    /// Last document produced by an explicit compose action.
    pub composed: Option<ComposedPrompt>,
    pub settings: Settings,
}

impl AppState {
    pub fn rate_quote(&self) -> RateQuote {
        self.settings.rate_provider().quote()
    }

    pub fn compose(&mut self) -> &ComposedPrompt {
        self.composed.insert(compose_prompt(&self.template))
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.settings = persisted.settings;
        if self.rate_quote().source == RateSource::Fallback {
            tracing::warn!(
                configured = self.settings.exchange_rate,
                fallback = DEFAULT_EXCHANGE_RATE,
                "saved exchange rate unusable, using default"
            );
        }
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            settings: self.settings.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub settings: Settings,
}
