//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};
use pricing_core::PlanCatalog;

use crate::pages::PricingPage;

/// Root application component
///
/// Owns the plan catalog and hands it to the page as a read-only value.
#[component]
pub fn App() -> impl IntoView {
    let catalog = PlanCatalog::builtin();
    let pricing_catalog = catalog.clone();

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <PricingPage catalog=catalog.clone() /> }
                    />
                    <Route
                        path=path!("/pricing")
                        view=move || view! { <PricingPage catalog=pricing_catalog.clone() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
