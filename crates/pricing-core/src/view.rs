//! Plan Card View Models
//!
//! Projection of a plan onto what a card shows for one billing period.
//! The web frontend renders these and the server returns them as JSON, so
//! both surfaces make the same price decision.

use serde::{Deserialize, Serialize};

use crate::catalog::PlanCatalog;
use crate::display::PriceDisplay;
use crate::model::{BillingPeriod, Plan};

/// Call-to-action as rendered on a card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToActionView {
    pub label: String,
    pub href: String,
    /// Accessible name of the link
    pub aria_label: String,
}

/// Everything a plan card displays
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCardView {
    pub name: String,
    pub featured: bool,
    pub price: PriceDisplay,
    pub description: String,
    pub button: CallToActionView,
    pub features: Vec<String>,
    pub logomark_class_name: String,
}

impl PlanCardView {
    /// Project a single plan
    pub fn project(plan: &Plan, period: BillingPeriod) -> Self {
        let price = PriceDisplay::resolve(&plan.price, period);
        let aria_label = Self::cta_label(&plan.name, price.visible());

        Self {
            name: plan.name.clone(),
            featured: plan.featured,
            price,
            description: plan.description.clone(),
            button: CallToActionView {
                label: plan.button.label.clone(),
                href: plan.button.href.clone(),
                aria_label,
            },
            features: plan.features.clone(),
            logomark_class_name: plan.logomark_class_name.clone(),
        }
    }

    /// Accessible name of a card's call-to-action
    pub fn cta_label(plan_name: &str, visible_price: &str) -> String {
        format!("Get started with the {} plan for {}", plan_name, visible_price)
    }

    /// Project the whole catalog for one period, in catalog order
    pub fn build_all(catalog: &PlanCatalog, period: BillingPeriod) -> Vec<Self> {
        catalog.iter().map(|plan| Self::project(plan, period)).collect()
    }

    /// String currently presented in the price slot
    pub fn visible_price(&self) -> &str {
        self.price.visible()
    }
}
