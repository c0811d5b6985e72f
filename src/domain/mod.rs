//! Pricing and prompt engines, plus the state the UI hands to them.

pub mod app_state;
pub mod pricing;
pub mod prompt;
pub mod rate;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, Settings};
#[allow(unused_imports)]
pub use pricing::{
    compute_pricing, compute_pricing_with, price_breakdown, InvalidInputError, PricingBreakdown,
    PricingInput, PricingPolicy, PricingResult, ProfitMode,
};
#[allow(unused_imports)]
pub use prompt::{compose_prompt, ComposedPrompt, PromptTemplateConfig};
#[allow(unused_imports)]
pub use rate::{ExchangeRate, RateProvider, RateQuote, RateSource};
