//! Plan Catalog
//!
//! Ordered, read-only list of plans. The page receives it as a value so
//! tests and deployments can swap in their own list.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::model::{CallToAction, Plan, PlanPrice};

/// Ordered list of subscription plans
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PlanCatalog {
    /// Catalog from an already authored list; order is kept as given
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// The catalog shipped with the site
    pub fn builtin() -> Self {
        Self::new(vec![
            Plan::new(
                "Starter",
                PlanPrice::flat("$0"),
                "You’re new to investing but want to do it right. Get started for free.",
                CallToAction::new("Get started for free", "/register"),
            )
            .with_features([
                "Commission-free trading",
                "Multi-layered encryption",
                "One tip every day",
                "Invest up to $1,500 each month",
            ])
            .with_logomark("fill-gray-300"),
            Plan::new(
                "Investor",
                PlanPrice::new("$7", "$70"),
                "You’ve been investing for a while. Invest more and grow your wealth faster.",
                CallToAction::new("Subscribe", "/register"),
            )
            .with_features([
                "Commission-free trading",
                "Multi-layered encryption",
                "One tip every hour",
                "Invest up to $15,000 each month",
                "Basic transaction anonymization",
            ])
            .with_logomark("fill-gray-500"),
            Plan::new(
                "VIP",
                PlanPrice::new("$199", "$1,990"),
                "You’ve got a huge amount of assets but it’s not enough. To the moon.",
                CallToAction::new("Subscribe", "/register"),
            )
            .featured()
            .with_features([
                "Commission-free trading",
                "Multi-layered encryption",
                "Real-time tip notifications",
                "No investment limits",
                "Advanced transaction anonymization",
                "Automated tax-loss harvesting",
            ])
            .with_logomark("fill-cyan-500"),
        ])
    }

    /// Parse a catalog document: `{"plans": [...]}`
    ///
    /// Only the shape is checked. A plan missing a price key fails to parse;
    /// empty feature lists and repeated names are taken as authored.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: PlanCatalog = serde_json::from_str(json)?;
        tracing::debug!(plans = catalog.len(), "parsed plan catalog");
        Ok(catalog)
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), plans = catalog.len(), "loaded plan catalog");
        Ok(catalog)
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Plan> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// First plan with this name
    pub fn get(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// The emphasized plan, if any
    pub fn featured(&self) -> Option<&Plan> {
        self.plans.iter().find(|p| p.featured)
    }
}

impl<'a> IntoIterator for &'a PlanCatalog {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::model::BillingPeriod;

    #[test]
    fn test_builtin_order() {
        let catalog = PlanCatalog::builtin();
        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Starter", "Investor", "VIP"]);
        assert_eq!(catalog, PlanCatalog::default());
    }

    #[test]
    fn test_builtin_prices_are_authored() {
        let catalog = PlanCatalog::builtin();
        let investor = catalog.get("Investor").unwrap();
        assert_eq!(investor.price.for_period(BillingPeriod::Annually), "$70");
        let vip = catalog.get("VIP").unwrap();
        assert_eq!(vip.price.for_period(BillingPeriod::Annually), "$1,990");
        assert!(catalog.get("Starter").unwrap().price.is_flat());
    }

    #[test]
    fn test_featured_plan() {
        let catalog = PlanCatalog::builtin();
        assert_eq!(catalog.featured().map(|p| p.name.as_str()), Some("VIP"));
        assert_eq!(catalog.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "plans": [
                {
                    "name": "Solo",
                    "price": { "Monthly": "$5", "Annually": "$50" },
                    "description": "One seat",
                    "button": { "label": "Buy", "href": "https://example.com/buy?plan=solo" },
                    "features": ["A", "A"],
                    "logomarkClassName": "fill-gray-300"
                },
                {
                    "name": "Empty",
                    "featured": true,
                    "price": { "Monthly": "$0", "Annually": "$0" },
                    "description": "",
                    "button": { "label": "Go", "href": "/go" }
                }
            ]
        }"#;

        let catalog = PlanCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let solo = catalog.get("Solo").unwrap();
        assert_eq!(solo.button.href, "https://example.com/buy?plan=solo");
        assert_eq!(solo.features, vec!["A", "A"]);
        assert!(!solo.featured);

        let empty = catalog.get("Empty").unwrap();
        assert!(empty.features.is_empty());
        assert!(empty.featured);
    }

    #[test]
    fn test_missing_price_key_is_rejected() {
        let json = r#"{"plans": [{
            "name": "Broken",
            "price": { "Monthly": "$5" },
            "description": "",
            "button": { "label": "Buy", "href": "/buy" }
        }]}"#;

        assert!(matches!(PlanCatalog::from_json(json), Err(PricingError::Json(_))));
    }

    #[test]
    fn test_missing_file_keeps_io_source() {
        let err = PlanCatalog::from_path("/nonexistent/plans.json").unwrap_err();
        match err {
            PricingError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_survives_json() {
        let catalog = PlanCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(PlanCatalog::from_json(&json).unwrap(), catalog);
    }
}
