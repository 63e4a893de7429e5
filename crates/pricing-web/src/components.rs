//! UI Components

use leptos::prelude::*;
use pricing_core::{ActivePeriod, BillingPeriod};

use crate::style::{self, ButtonColor};

/// Centered page-width wrapper
#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">{children()}</div>
    }
}

/// Link styled as a button
#[component]
pub fn Button(
    #[prop(into)] href: String,
    color: ButtonColor,
    #[prop(into)] aria_label: Signal<String>,
    #[prop(optional, into)] class_name: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=style::button(color, &class_name)
            aria-label=move || aria_label.get()
        >
            {children()}
        </a>
    }
}

/// Brand mark
#[component]
pub fn Logomark(#[prop(into)] class_name: String) -> impl IntoView {
    view! {
        <svg viewBox="0 0 40 40" aria-hidden="true" class=class_name>
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M20 40C8.954 40 0 31.046 0 20S8.954 0 20 0s20 8.954 20 20-8.954 20-20 20Zm4-25.6a5.6 5.6 0 1 0 0 11.2 5.6 5.6 0 0 0 0-11.2Z"
            />
        </svg>
    }
}

/// Circled check mark in front of a feature label
#[component]
pub fn CheckIcon(#[prop(into)] class_name: String) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true" class=class_name>
            <path
                d="M9.307 12.248a.75.75 0 1 0-1.114 1.004l1.114-1.004ZM11 15.25l-.557.502a.75.75 0 0 0 1.15-.043L11 15.25Zm4.844-5.041a.75.75 0 0 0-1.188-.918l1.188.918Zm-7.651 3.043 2.25 2.5 1.114-1.004-2.25-2.5-1.114 1.004Zm3.4 2.457 4.25-5.5-1.187-.918-4.25 5.5 1.188.918Z"
                fill="currentColor"
            />
            <circle
                cx="12"
                cy="12"
                r="8.25"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

/// Monthly/Annually radio group
///
/// Writes the selection into the page-owned period; every card reading it
/// updates in the same reactive pass.
#[component]
pub fn PeriodToggle(active: RwSignal<ActivePeriod>) -> impl IntoView {
    let options = BillingPeriod::ALL
        .into_iter()
        .map(|period| {
            view! {
                <button
                    type="button"
                    role="radio"
                    aria-checked=move || if active.get().is(period) { "true" } else { "false" }
                    class=style::toggle_option(period)
                    on:click=move |_| active.update(|a| a.set_period(period))
                >
                    {period.as_str()}
                </button>
            }
        })
        .collect_view();

    let highlight = BillingPeriod::ALL
        .into_iter()
        .map(|period| {
            view! { <div class=style::toggle_highlight_label(period)>{period.as_str()}</div> }
        })
        .collect_view();

    view! {
        <div class="relative">
            <div role="radiogroup" aria-label="Billing period" class="grid grid-cols-2">
                {options}
            </div>
            <div
                aria-hidden="true"
                class=move || style::toggle_highlight(active.get().period())
            >
                {highlight}
            </div>
        </div>
    }
}
