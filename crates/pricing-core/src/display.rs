//! Price Display
//!
//! Decides what a plan's price slot shows for a billing period.
//!
//! A plan whose two strings match shows one static value. Otherwise both
//! strings are rendered stacked and the renderer fades/slides between them,
//! so switching periods never remounts the slot:
//!
//! ```text
//!   Monthly active              Annually active
//!   ┌──────────┐                ┌──────────┐
//!   │ $7       │ visible        │ $7  ───▶ │ hidden, shifted right
//!   │ $70 ◀─── │ hidden, left   │ $70      │ visible
//!   └──────────┘                └──────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{BillingPeriod, PlanPrice};

/// Where a hidden layer slides to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceOffset {
    /// In place
    None,
    /// Shifted left (annual layer while monthly is shown)
    Left,
    /// Shifted right (monthly layer while annual is shown)
    Right,
}

/// One of the two stacked price strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLayer {
    pub period: BillingPeriod,
    pub text: String,
    /// Hidden layers are aria-hidden and non-interactive
    pub hidden: bool,
    pub offset: PriceOffset,
}

/// Both strings of a two-price plan plus which one is showing
///
/// `primary` is the Monthly string (in-flow layer), `secondary` the Annually
/// string (absolutely positioned over it).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTransition {
    pub primary: String,
    pub secondary: String,
    pub secondary_visible: bool,
}

impl PriceTransition {
    /// Stack both strings of `price`, showing the one for `period`
    ///
    /// Does not check for a flat price; use [`PriceDisplay::resolve`] when
    /// the single-value case matters.
    pub fn for_period(price: &PlanPrice, period: BillingPeriod) -> Self {
        Self {
            primary: price.monthly.clone(),
            secondary: price.annually.clone(),
            secondary_visible: period == BillingPeriod::Annually,
        }
    }

    /// The string currently presented
    pub fn visible(&self) -> &str {
        if self.secondary_visible {
            &self.secondary
        } else {
            &self.primary
        }
    }

    pub fn active_period(&self) -> BillingPeriod {
        if self.secondary_visible {
            BillingPeriod::Annually
        } else {
            BillingPeriod::Monthly
        }
    }

    /// Both layers in DOM order; exactly one has `hidden == false`
    pub fn layers(&self) -> [PriceLayer; 2] {
        let annual = self.secondary_visible;
        [
            PriceLayer {
                period: BillingPeriod::Monthly,
                text: self.primary.clone(),
                hidden: annual,
                offset: if annual { PriceOffset::Right } else { PriceOffset::None },
            },
            PriceLayer {
                period: BillingPeriod::Annually,
                text: self.secondary.clone(),
                hidden: !annual,
                offset: if annual { PriceOffset::None } else { PriceOffset::Left },
            },
        ]
    }
}

/// What a plan's price slot shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PriceDisplay {
    /// Same string for both periods, no transition
    Single { text: String },
    /// Two strings, one visible
    Transition(PriceTransition),
}

impl PriceDisplay {
    /// Resolve a plan's price for the active period
    pub fn resolve(price: &PlanPrice, period: BillingPeriod) -> Self {
        if price.is_flat() {
            return PriceDisplay::Single {
                text: price.monthly.clone(),
            };
        }

        PriceDisplay::Transition(PriceTransition::for_period(price, period))
    }

    pub fn visible(&self) -> &str {
        match self {
            PriceDisplay::Single { text } => text,
            PriceDisplay::Transition(transition) => transition.visible(),
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, PriceDisplay::Transition(_))
    }

    /// Every string the slot renders, hidden ones included
    pub fn rendered_strings(&self) -> Vec<&str> {
        match self {
            PriceDisplay::Single { text } => vec![text.as_str()],
            PriceDisplay::Transition(t) => vec![t.primary.as_str(), t.secondary.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_price_is_single() {
        let price = PlanPrice::flat("$0");
        for period in BillingPeriod::ALL {
            let display = PriceDisplay::resolve(&price, period);
            assert_eq!(display, PriceDisplay::Single { text: "$0".into() });
            assert_eq!(display.rendered_strings(), vec!["$0"]);
            assert!(!display.is_transition());
        }
    }

    #[test]
    fn test_two_prices_render_both() {
        let price = PlanPrice::new("$7", "$70");

        let monthly = PriceDisplay::resolve(&price, BillingPeriod::Monthly);
        assert_eq!(monthly.rendered_strings(), vec!["$7", "$70"]);
        assert_eq!(monthly.visible(), "$7");

        let annually = PriceDisplay::resolve(&price, BillingPeriod::Annually);
        assert_eq!(annually.rendered_strings(), vec!["$7", "$70"]);
        assert_eq!(annually.visible(), "$70");
    }

    #[test]
    fn test_exactly_one_layer_visible() {
        let price = PlanPrice::new("$199", "$1,990");
        for period in BillingPeriod::ALL {
            let PriceDisplay::Transition(transition) = PriceDisplay::resolve(&price, period) else {
                panic!("expected a transition");
            };
            let layers = transition.layers();
            let shown: Vec<_> = layers.iter().filter(|l| !l.hidden).collect();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].period, period);
            assert_eq!(shown[0].offset, PriceOffset::None);
            assert_eq!(transition.active_period(), period);
        }
    }

    #[test]
    fn test_hidden_layers_slide_apart() {
        let price = PlanPrice::new("$7", "$70");

        let PriceDisplay::Transition(t) = PriceDisplay::resolve(&price, BillingPeriod::Monthly) else {
            panic!("expected a transition");
        };
        assert_eq!(t.layers()[1].offset, PriceOffset::Left);

        let PriceDisplay::Transition(t) = PriceDisplay::resolve(&price, BillingPeriod::Annually) else {
            panic!("expected a transition");
        };
        assert_eq!(t.layers()[0].offset, PriceOffset::Right);
    }

    #[test]
    fn test_equality_is_string_equality() {
        // "$0" and "$0.00" are different strings, so they toggle
        let price = PlanPrice::new("$0", "$0.00");
        assert!(PriceDisplay::resolve(&price, BillingPeriod::Monthly).is_transition());
    }
}
