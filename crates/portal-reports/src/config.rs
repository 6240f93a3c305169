//! Reporting configuration.

use portal_core::error::{PortalError, PortalResult};

/// Configuration for payout calculation.
#[derive(Debug, Clone)]
pub struct PayoutConfig {
    /// Commission rate applied to won deals when the company has no
    /// rate of its own (default: 0.10 = 10%).
    pub default_commission_rate: f64,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            default_commission_rate: 0.10,
        }
    }
}

impl PayoutConfig {
    /// Build a config with a custom default commission rate.
    ///
    /// The rate is a fraction of deal revenue and must lie in
    /// `0.0..=1.0`.
    pub fn with_default_rate(rate: f64) -> PortalResult<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(PortalError::Validation {
                message: format!("commission rate {rate} is not between 0.0 and 1.0"),
            });
        }
        Ok(Self {
            default_commission_rate: rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_is_ten_percent() {
        assert_eq!(PayoutConfig::default().default_commission_rate, 0.10);
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        assert!(PayoutConfig::with_default_rate(1.5).is_err());
        assert!(PayoutConfig::with_default_rate(-0.1).is_err());
        assert!(PayoutConfig::with_default_rate(0.2).is_ok());
    }
}
