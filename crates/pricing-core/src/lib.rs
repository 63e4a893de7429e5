//! # pricing-core
//!
//! Domain model for the pricing section: the plan catalog, the
//! Monthly/Annually toggle and the per-plan price display decision.
//!
//! ## Data flow
//!
//! ```text
//! ┌──────────────┐   period    ┌──────────────┐   PriceDisplay   ┌──────────┐
//! │ ActivePeriod │────────────▶│ PlanCardView │─────────────────▶│ renderer │
//! │  (toggle)    │             │  (per plan)  │                  │ web/json │
//! └──────────────┘             └──────────────┘                  └──────────┘
//!        ▲                            ▲
//!        │ set_period                 │ read-only
//!     user input               ┌──────────────┐
//!                              │ PlanCatalog  │
//!                              └──────────────┘
//! ```
//!
//! Prices are pre-formatted strings. Nothing here does currency math.

pub mod catalog;
pub mod content;
pub mod display;
pub mod error;
pub mod model;
pub mod period;
pub mod view;

pub use catalog::PlanCatalog;
pub use content::{ComparisonRow, ComparisonTable, SectionCopy};
pub use display::{PriceDisplay, PriceLayer, PriceOffset, PriceTransition};
pub use error::{PricingError, Result};
pub use model::{BillingPeriod, CallToAction, Plan, PlanPrice};
pub use period::ActivePeriod;
pub use view::{CallToActionView, PlanCardView};
