//! Domain Models
//!
//! Plan records and the billing period they are priced for. Prices are
//! authored display strings: the annual figure is written independently and
//! is never derived from the monthly one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PricingError;

/// Billing interval a price is quoted for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    #[serde(alias = "Monthly")]
    Monthly,
    #[serde(alias = "Annually")]
    Annually,
}

impl BillingPeriod {
    /// Both periods in toggle order
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Annually];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Annually => "Annually",
        }
    }

    /// The other period
    pub fn opposite(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Annually,
            BillingPeriod::Annually => BillingPeriod::Monthly,
        }
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(BillingPeriod::Monthly),
            "annually" => Ok(BillingPeriod::Annually),
            _ => Err(PricingError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Price strings keyed by billing period
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPrice {
    #[serde(rename = "Monthly")]
    pub monthly: String,

    #[serde(rename = "Annually")]
    pub annually: String,
}

impl PlanPrice {
    pub fn new(monthly: impl Into<String>, annually: impl Into<String>) -> Self {
        Self {
            monthly: monthly.into(),
            annually: annually.into(),
        }
    }

    /// Same string for both periods (e.g. a free tier)
    pub fn flat(price: impl Into<String>) -> Self {
        let price = price.into();
        Self {
            monthly: price.clone(),
            annually: price,
        }
    }

    /// Look up the string for a period
    pub fn for_period(&self, period: BillingPeriod) -> &str {
        match period {
            BillingPeriod::Monthly => &self.monthly,
            BillingPeriod::Annually => &self.annually,
        }
    }

    /// True when both periods show the same string
    pub fn is_flat(&self) -> bool {
        self.monthly == self.annually
    }
}

/// Call-to-action link; `href` is passed through untouched
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A subscription tier as authored in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Display name, unique within a catalog
    pub name: String,

    /// Emphasized card, first on wide layouts
    #[serde(default)]
    pub featured: bool,

    pub price: PlanPrice,

    pub description: String,

    pub button: CallToAction,

    /// Feature labels in display order
    #[serde(default)]
    pub features: Vec<String>,

    /// Styling token for the brand mark
    #[serde(default, rename = "logomarkClassName", alias = "logomark_class_name")]
    pub logomark_class_name: String,
}

impl Plan {
    pub fn new(
        name: impl Into<String>,
        price: PlanPrice,
        description: impl Into<String>,
        button: CallToAction,
    ) -> Self {
        Self {
            name: name.into(),
            featured: false,
            price,
            description: description.into(),
            button,
            features: Vec::new(),
            logomark_class_name: String::new(),
        }
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_logomark(mut self, class_name: impl Into<String>) -> Self {
        self.logomark_class_name = class_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing() {
        assert_eq!("monthly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Monthly);
        assert_eq!("Annually".parse::<BillingPeriod>().unwrap(), BillingPeriod::Annually);
        assert_eq!(" ANNUALLY ".parse::<BillingPeriod>().unwrap(), BillingPeriod::Annually);
        assert!(matches!(
            "yearly".parse::<BillingPeriod>(),
            Err(PricingError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn test_period_default_and_opposite() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
        assert_eq!(BillingPeriod::Monthly.opposite(), BillingPeriod::Annually);
        assert_eq!(BillingPeriod::Annually.opposite().opposite(), BillingPeriod::Annually);
    }

    #[test]
    fn test_period_serde_accepts_both_spellings() {
        let lower: BillingPeriod = serde_json::from_str("\"annually\"").unwrap();
        let pascal: BillingPeriod = serde_json::from_str("\"Annually\"").unwrap();
        assert_eq!(lower, pascal);
        assert_eq!(serde_json::to_string(&BillingPeriod::Monthly).unwrap(), "\"monthly\"");
    }

    #[test]
    fn test_price_lookup_is_literal() {
        let price = PlanPrice::new("$7", "$70");
        assert_eq!(price.for_period(BillingPeriod::Monthly), "$7");
        // Authored annual string, not 12 x monthly
        assert_eq!(price.for_period(BillingPeriod::Annually), "$70");
        assert!(!price.is_flat());
        assert!(PlanPrice::flat("$0").is_flat());
    }

    #[test]
    fn test_price_uses_period_keys() {
        let price: PlanPrice =
            serde_json::from_str(r#"{"Monthly": "$199", "Annually": "$1,990"}"#).unwrap();
        assert_eq!(price.annually, "$1,990");

        let missing = serde_json::from_str::<PlanPrice>(r#"{"Monthly": "$199"}"#);
        assert!(missing.is_err());
    }
}
