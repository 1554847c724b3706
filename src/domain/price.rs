// src/domain/price.rs

use std::fmt;
use std::str::FromStr;

/// Prices below this are `Low`.
pub const LOW_PRICE_MARGIN: u32 = 10_000;
/// Prices above this are `High`.
pub const HIGH_PRICE_MARGIN: u32 = 50_000;

/// Categorical bucket derived from an offer's nightly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceTier {
    Low,
    Middle,
    High,
}

impl PriceTier {
    /// Buckets a price. Both margins belong to `Middle`.
    pub fn from_price(price: u32) -> Self {
        if price < LOW_PRICE_MARGIN {
            PriceTier::Low
        } else if price > HIGH_PRICE_MARGIN {
            PriceTier::High
        } else {
            PriceTier::Middle
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceTier::Low => "low",
            PriceTier::Middle => "middle",
            PriceTier::High => "high",
        }
    }
}

impl FromStr for PriceTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(PriceTier::Low),
            "middle" => Ok(PriceTier::Middle),
            "high" => Ok(PriceTier::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_belong_to_middle() {
        assert_eq!(PriceTier::from_price(9_999), PriceTier::Low);
        assert_eq!(PriceTier::from_price(10_000), PriceTier::Middle);
        assert_eq!(PriceTier::from_price(50_000), PriceTier::Middle);
        assert_eq!(PriceTier::from_price(50_001), PriceTier::High);
    }

    #[test]
    fn zero_is_low() {
        assert_eq!(PriceTier::from_price(0), PriceTier::Low);
    }
}
