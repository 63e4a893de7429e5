//! Pricing Page

use leptos::prelude::*;
use pricing_core::{
    ActivePeriod, BillingPeriod, ComparisonTable, Plan, PlanCardView, PlanCatalog, PlanPrice,
    PriceDisplay, SectionCopy,
};

use crate::components::{Button, CheckIcon, Container, Logomark, PeriodToggle};
use crate::style::{self, ButtonColor};

#[component]
pub fn PricingPage(catalog: PlanCatalog) -> impl IntoView {
    let active = RwSignal::new(ActivePeriod::initialize());
    let period = Signal::derive(move || active.get().period());
    let copy = SectionCopy::standard();

    let cards = catalog
        .plans()
        .iter()
        .cloned()
        .map(|plan| view! { <PlanCard plan=plan period=period /> })
        .collect_view();

    let cost_lines = copy
        .cost_lines
        .into_iter()
        .map(|line| view! { <p class="text-sm text-gray-600">{line}</p> })
        .collect_view();

    let audience = copy
        .audience
        .into_iter()
        .map(|entry| view! { <p>{entry}</p> })
        .collect_view();

    view! {
        <section
            id="pricing"
            aria-labelledby="pricing-title"
            class="border-t border-gray-200 bg-gray-100 py-20 sm:py-32"
        >
            <Container>
                <div class="mx-auto max-w-2xl text-center">
                    <h2
                        id="pricing-title"
                        class="text-3xl font-medium tracking-tight text-gray-900"
                    >
                        {copy.title}
                    </h2>
                    <p class="mt-2 text-lg text-gray-600">{copy.lead}</p>
                </div>

                <div class="mt-8 flex justify-center">
                    <PeriodToggle active=active />
                </div>

                <div class="mx-auto mt-16 grid max-w-2xl grid-cols-1 items-start gap-x-8 gap-y-10 sm:mt-20 lg:max-w-none lg:grid-cols-3">
                    {cards}
                </div>

                <ComparisonTableView table=ComparisonTable::standard() />

                <div class="mx-auto mt-4 w-full pt-4 text-center">
                    <p class="text-sm font-semibold text-gray-800">{copy.cost_heading}</p>
                    {cost_lines}
                    <p class="text-sm font-semibold text-gray-600">{copy.cost_summary}</p>
                </div>

                <div class="mt-8 flex w-full max-w-7xl flex-col items-center px-4 text-lg text-gray-800 lg:px-8">
                    <span class="font-semibold text-gray-800">{copy.audience_heading}</span>
                    {audience}
                </div>
            </Container>
        </section>
    }
}

/// One subscription tier
#[component]
fn PlanCard(plan: Plan, #[prop(into)] period: Signal<BillingPeriod>) -> impl IntoView {
    let Plan {
        name,
        featured,
        price,
        description,
        button,
        features,
        logomark_class_name,
    } = plan;

    let aria_label = {
        let name = name.clone();
        let price = price.clone();
        Signal::derive(move || {
            PlanCardView::cta_label(&name, PriceDisplay::resolve(&price, period.get()).visible())
        })
    };

    let features = features
        .into_iter()
        .map(|feature| {
            view! {
                <li class="flex py-2">
                    <CheckIcon class_name=style::check_icon(featured) />
                    <span class="ml-4">{feature}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class=style::card(featured)>
            <h3 class=style::card_heading(featured)>
                <Logomark class_name=style::logomark(&logomark_class_name) />
                <span class="ml-4">{name}</span>
            </h3>
            <p class=style::price_slot(featured)>
                <PriceSlot price=price period=period />
            </p>
            <p class=style::description(featured)>{description}</p>
            <div class="order-last mt-6">
                <ul role="list" class=style::feature_list(featured)>
                    {features}
                </ul>
            </div>
            <Button
                href=button.href
                color=ButtonColor::for_card(featured)
                aria_label=aria_label
                class_name="mt-6"
            >
                {button.label}
            </Button>
        </section>
    }
}

/// Price text of a card
///
/// A flat price is plain text. Two prices are both mounted, stacked, and
/// only their classes and `aria-hidden` follow the period.
#[component]
fn PriceSlot(price: PlanPrice, period: Signal<BillingPeriod>) -> impl IntoView {
    if price.is_flat() {
        return view! { <span>{price.monthly}</span> }.into_any();
    }

    let spans = Memo::new(move |_| style::price_spans(&price, period.get()));

    spans
        .get_untracked()
        .into_iter()
        .enumerate()
        .map(|(i, span)| {
            view! {
                <span
                    aria-hidden=move || spans.with(|s| s[i].aria_hidden.unwrap_or("false"))
                    class=move || spans.with(|s| s[i].class.clone().unwrap_or_default())
                >
                    {span.text}
                </span>
            }
        })
        .collect_view()
        .into_any()
}

/// Segment comparison table
#[component]
fn ComparisonTableView(table: ComparisonTable) -> impl IntoView {
    let columns = table.columns.len();

    let headers = table
        .columns
        .into_iter()
        .enumerate()
        .map(|(i, title)| {
            view! { <th scope="col" class=style::table_cell(i, columns, true)>{title}</th> }
        })
        .collect_view();

    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            let cells = row
                .cells()
                .into_iter()
                .enumerate()
                .map(|(i, text)| view! { <td class=style::table_cell(i, columns, false)>{text}</td> })
                .collect_view();
            view! { <tr class="divide-x divide-gray-200">{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="mt-8 flow-root">
            <div class="-mx-4 -my-2 overflow-x-auto sm:-mx-6 lg:-mx-8">
                <div class="inline-block min-w-full py-2 align-middle sm:px-6 lg:px-8">
                    <table class="min-w-full divide-y divide-gray-300">
                        <thead>
                            <tr class="divide-x divide-gray-200">{headers}</tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">{rows}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
