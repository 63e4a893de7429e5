//! Tailwind class builders
//!
//! Kept free of Leptos types so the styling rules can be unit tested.

use pricing_core::{BillingPeriod, PlanPrice, PriceDisplay, PriceLayer, PriceOffset};

/// Join the present class fragments with single spaces
pub fn classes<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn pick(featured: bool, on: &'static str, off: &'static str) -> Option<&'static str> {
    Some(if featured { on } else { off })
}

/// Outer card. The featured card moves first only from `lg` up.
pub fn card(featured: bool) -> String {
    classes([
        Some("flex flex-col overflow-hidden rounded-3xl p-6 shadow-lg shadow-gray-900/5"),
        pick(featured, "bg-gray-900 lg:order-first", "bg-white"),
    ])
}

pub fn card_heading(featured: bool) -> String {
    classes([
        Some("flex items-center text-sm font-semibold"),
        pick(featured, "text-white", "text-gray-900"),
    ])
}

pub fn price_slot(featured: bool) -> String {
    classes([
        Some("relative mt-5 flex text-3xl tracking-tight"),
        pick(featured, "text-white", "text-gray-900"),
    ])
}

pub fn description(featured: bool) -> String {
    classes([
        Some("mt-3 text-sm"),
        pick(featured, "text-gray-300", "text-gray-700"),
    ])
}

pub fn feature_list(featured: bool) -> String {
    classes([
        Some("-my-2 divide-y text-sm"),
        pick(
            featured,
            "divide-gray-800 text-gray-300",
            "divide-gray-200 text-gray-700",
        ),
    ])
}

pub fn check_icon(featured: bool) -> String {
    classes([
        Some("h-6 w-6 flex-none"),
        pick(featured, "text-white", "text-cyan-500"),
    ])
}

pub fn logomark(token: &str) -> String {
    classes([Some("h-6 w-6 flex-none"), Some(token)])
}

/// One stacked price string. The annual layer sits on top of the monthly one.
pub fn price_layer(layer: &PriceLayer) -> String {
    let position = match layer.period {
        BillingPeriod::Monthly => None,
        BillingPeriod::Annually => Some("absolute top-0 left-0"),
    };
    let offset = match layer.offset {
        PriceOffset::None => None,
        PriceOffset::Left => Some("-translate-x-6"),
        PriceOffset::Right => Some("translate-x-6"),
    };
    classes([
        position,
        Some("transition duration-300"),
        layer
            .hidden
            .then_some("pointer-events-none opacity-0 select-none"),
        offset,
    ])
}

/// Value for `aria-hidden`
pub fn aria_hidden(hidden: bool) -> &'static str {
    if hidden { "true" } else { "false" }
}

/// Text and attributes of one `<span>` in a card's price slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceSpan {
    pub text: String,
    /// `None` for a flat price, which carries no transition markup
    pub aria_hidden: Option<&'static str>,
    pub class: Option<String>,
}

/// Spans of a price slot in DOM order
///
/// One bare span for a flat price; otherwise one span per layer, where
/// the text and its attributes come from the same layer.
pub fn price_spans(price: &PlanPrice, period: BillingPeriod) -> Vec<PriceSpan> {
    match PriceDisplay::resolve(price, period) {
        PriceDisplay::Single { text } => vec![PriceSpan {
            text,
            aria_hidden: None,
            class: None,
        }],
        PriceDisplay::Transition(transition) => transition
            .layers()
            .iter()
            .map(|layer| PriceSpan {
                text: layer.text.clone(),
                aria_hidden: Some(aria_hidden(layer.hidden)),
                class: Some(price_layer(layer)),
            })
            .collect(),
    }
}

/// Link button colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonColor {
    Gray,
    Cyan,
}

impl ButtonColor {
    pub fn for_card(featured: bool) -> Self {
        if featured {
            ButtonColor::Cyan
        } else {
            ButtonColor::Gray
        }
    }
}

pub fn button(color: ButtonColor, extra: &str) -> String {
    let palette = match color {
        ButtonColor::Gray => "bg-gray-800 text-white hover:bg-gray-900 active:bg-gray-800 active:text-white/80",
        ButtonColor::Cyan => "bg-cyan-300 text-cyan-900 hover:bg-cyan-200 active:bg-cyan-500",
    };
    classes([
        Some("inline-flex justify-center rounded-lg py-2 px-3 text-sm font-semibold outline-2 outline-offset-2 transition-colors"),
        Some(palette),
        Some(extra),
    ])
}

/// Radio option of the period toggle
pub fn toggle_option(period: BillingPeriod) -> String {
    classes([
        Some("cursor-pointer border border-gray-300 px-3 py-2 text-sm text-gray-700 transition-colors hover:border-gray-400 focus-visible:outline-2 focus-visible:outline-offset-2"),
        Some(match period {
            BillingPeriod::Monthly => "rounded-l-lg",
            BillingPeriod::Annually => "-ml-px rounded-r-lg",
        }),
    ])
}

/// Highlight overlay clipped to the selected half
pub fn toggle_highlight(active: BillingPeriod) -> String {
    classes([
        Some("pointer-events-none absolute inset-0 z-10 grid grid-cols-2 overflow-hidden rounded-lg bg-cyan-500 transition-all duration-300"),
        Some(match active {
            BillingPeriod::Monthly => "[clip-path:inset(0_50%_0_0)]",
            BillingPeriod::Annually => "[clip-path:inset(0_0_0_calc(50%-1px))]",
        }),
    ])
}

pub fn toggle_highlight_label(period: BillingPeriod) -> String {
    classes([
        Some("py-2 text-center text-sm font-semibold text-white"),
        (period == BillingPeriod::Annually).then_some("-ml-px"),
    ])
}

/// Table cell padding depends on the column position
pub fn table_cell(index: usize, columns: usize, header: bool) -> String {
    let padding = if index == 0 {
        if header { "py-3.5 pr-4 pl-4 sm:pl-0" } else { "py-4 pr-4 pl-4 sm:pl-0" }
    } else if index + 1 == columns {
        if header { "py-3.5 pr-4 pl-4 sm:pr-0" } else { "py-4 pr-4 pl-4 sm:pr-0" }
    } else if header {
        "px-4 py-3.5"
    } else {
        "p-4"
    };
    let text = match (header, index) {
        (true, _) => "text-left text-sm font-semibold text-gray-900",
        (false, 0) => "text-sm font-medium whitespace-nowrap text-gray-900",
        (false, _) => "text-sm whitespace-nowrap text-gray-500",
    };
    classes([Some(padding), Some(text)])
}
