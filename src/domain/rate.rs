//! Exchange rate value and the providers that supply it.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use super::pricing::InvalidInputError;

/// USD to KRW rate used when nothing else is configured.
pub const DEFAULT_EXCHANGE_RATE: f64 = 1350.0;

/// Configured rates older than this are flagged as stale.
pub const DEFAULT_RATE_MAX_AGE_HOURS: u32 = 24;

/// Foreign-to-local currency multiplier. Always finite and positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    pub fn new(value: f64) -> Result<Self, InvalidInputError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(InvalidInputError::InvalidRate)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self(DEFAULT_EXCHANGE_RATE)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ExchangeRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        ExchangeRate::new(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateSource {
    Fixed,
    Configured,
    /// The configured value was unusable and the default was substituted.
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateQuote {
    pub rate: ExchangeRate,
    pub source: RateSource,
    pub stale: bool,
}

/// Supplies the current exchange rate to the pricing engine.
pub trait RateProvider {
    fn current_rate(&self) -> ExchangeRate;

    fn quote(&self) -> RateQuote {
        RateQuote {
            rate: self.current_rate(),
            source: RateSource::Fixed,
            stale: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedRate(pub ExchangeRate);

impl RateProvider for FixedRate {
    fn current_rate(&self) -> ExchangeRate {
        self.0
    }
}

/// A rate entered by the user, with the time it was entered.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfiguredRate {
    pub value: f64,
    pub updated_at: Option<OffsetDateTime>,
    pub max_age: Duration,
}

impl ConfiguredRate {
    pub fn new(value: f64, updated_at: Option<OffsetDateTime>, max_age_hours: u32) -> Self {
        Self {
            value,
            updated_at,
            max_age: Duration::hours(i64::from(max_age_hours)),
        }
    }

    pub fn quote_at(&self, now: OffsetDateTime) -> RateQuote {
        let Ok(rate) = ExchangeRate::new(self.value) else {
            return RateQuote {
                source: RateSource::Fallback,
                stale: true,
                ..FixedRate::default().quote()
            };
        };

        // A rate with no timestamp was never confirmed, so it counts as stale.
        let stale = self
            .updated_at
            .map(|at| now - at > self.max_age)
            .unwrap_or(true);

        RateQuote {
            rate,
            source: RateSource::Configured,
            stale,
        }
    }
}

impl RateProvider for ConfiguredRate {
    fn current_rate(&self) -> ExchangeRate {
        self.quote().rate
    }

    fn quote(&self) -> RateQuote {
        self.quote_at(OffsetDateTime::now_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_and_non_finite_rates() {
        assert!(ExchangeRate::new(0.0).is_err());
        assert!(ExchangeRate::new(-1350.0).is_err());
        assert!(ExchangeRate::new(f64::NAN).is_err());
        assert!(ExchangeRate::new(f64::INFINITY).is_err());
        assert_eq!(ExchangeRate::new(1350.0).unwrap().value(), 1350.0);
    }

    #[test]
    fn fixed_rate_is_never_stale() {
        let provider = FixedRate(ExchangeRate::default());
        let quote = provider.quote();
        assert_eq!(quote.rate.value(), DEFAULT_EXCHANGE_RATE);
        assert_eq!(quote.source, RateSource::Fixed);
        assert!(!quote.stale);
    }

    #[test]
    fn configured_rate_goes_stale_after_max_age() {
        let entered = OffsetDateTime::UNIX_EPOCH + Duration::days(100);
        let provider = ConfiguredRate::new(1412.5, Some(entered), 24);

        let fresh = provider.quote_at(entered + Duration::hours(23));
        assert_eq!(fresh.rate.value(), 1412.5);
        assert_eq!(fresh.source, RateSource::Configured);
        assert!(!fresh.stale);

        let stale = provider.quote_at(entered + Duration::hours(25));
        assert_eq!(stale.rate.value(), 1412.5);
        assert!(stale.stale);
    }

    #[test]
    fn configured_rate_without_timestamp_is_stale() {
        let provider = ConfiguredRate::new(1300.0, None, 24);
        let quote = provider.quote_at(OffsetDateTime::UNIX_EPOCH);
        assert!(quote.stale);
        assert_eq!(quote.rate.value(), 1300.0);
    }

    #[test]
    fn invalid_configured_rate_falls_back_to_default() {
        let provider = ConfiguredRate::new(0.0, Some(OffsetDateTime::UNIX_EPOCH), 24);
        let quote = provider.quote_at(OffsetDateTime::UNIX_EPOCH);
        assert_eq!(quote.source, RateSource::Fallback);
        assert_eq!(quote.rate, ExchangeRate::default());
        assert_eq!(provider.current_rate(), ExchangeRate::default());
    }

    #[test]
    fn deserialize_validates_rate() {
        let rate: ExchangeRate = serde_json::from_str("1350").unwrap();
        assert_eq!(rate.value(), 1350.0);
        assert!(serde_json::from_str::<ExchangeRate>("-5").is_err());
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(ExchangeRate::new(1350.0).unwrap().to_string(), "1350");
        assert_eq!(ExchangeRate::new(1350.25).unwrap().to_string(), "1350.25");
    }
}
