use serde::{Deserialize, Serialize};

/// Price band used to colour map markers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Under $6.00
    Budget,
    /// $6.00 - $6.99
    Moderate,
    /// $7.00 - $7.99
    Pricey,
    /// $8.00+
    Premium,
}

impl PriceTier {
    #[must_use]
    pub fn for_price(price: f64) -> Self {
        if price < 6.0 {
            Self::Budget
        } else if price < 7.0 {
            Self::Moderate
        } else if price < 8.0 {
            Self::Pricey
        } else {
            Self::Premium
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Budget => "#4CAF50",
            Self::Moderate => "#2196F3",
            Self::Pricey => "#FFC107",
            Self::Premium => "#F44336",
        }
    }
}

/// Marker colour for a price.
#[must_use]
pub fn marker_color(price: f64) -> &'static str {
    PriceTier::for_price(price).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(marker_color(5.99), "#4CAF50");
        assert_eq!(marker_color(6.00), "#2196F3");
        assert_eq!(marker_color(6.99), "#2196F3");
        assert_eq!(marker_color(7.00), "#FFC107");
        assert_eq!(marker_color(7.99), "#FFC107");
        assert_eq!(marker_color(8.00), "#F44336");
        assert_eq!(marker_color(12.5), "#F44336");
    }
}
