use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

#[component]
pub fn Badge(
    #[prop(into)] text: String,
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] small: bool,
) -> impl IntoView {
    let tone = match variant {
        BadgeVariant::Secondary => "bg-gray-100 text-gray-900 border-transparent",
        BadgeVariant::Outline => "bg-transparent text-gray-700 border-gray-200",
    };
    let size = if small { "text-xs" } else { "text-sm" };
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 font-semibold {tone} {size}",
        )>{text}</span>
    }
}

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center rounded-md px-6 py-3 text-sm font-medium text-white bg-gray-900 hover:bg-gray-800 transition-colors";
pub const BUTTON_OUTLINE: &str = "inline-flex items-center justify-center rounded-md px-6 py-3 text-sm font-medium border border-gray-200 bg-white hover:bg-gray-100 transition-colors";
pub const BUTTON_SMALL_OUTLINE: &str = "inline-flex items-center justify-center rounded-md px-3 py-1.5 text-sm font-medium border border-gray-200 bg-white hover:bg-gray-100 transition-colors";
pub const CARD: &str = "rounded-lg border border-gray-200 bg-white shadow-sm overflow-hidden hover:shadow-lg transition-shadow";
