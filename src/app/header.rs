use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::content::{NavLink, NAV_LINKS, SITE};
use crate::nav::{is_active, NavState};

const DESKTOP_LINK: &str = "text-sm font-medium transition-colors hover:text-gray-900";
const MOBILE_LINK: &str = "block px-3 py-2 text-sm font-medium transition-colors";

fn link_class(base: &str, pathname: &str, link: &NavLink) -> String {
    let tone = if is_active(pathname, link.href) {
        "text-gray-900"
    } else {
        "text-gray-600"
    };
    format!("{base} {tone}")
}

#[component]
pub fn Header() -> impl IntoView {
    let (nav, set_nav) = signal(NavState::default());
    let pathname = use_location().pathname;

    // any route change collapses the mobile menu
    Effect::watch(
        move || pathname.get(),
        move |path, _, _| {
            log::debug!("navigated to {path}");
            set_nav.update(NavState::navigate);
        },
        false,
    );

    let links = move |base: &'static str| {
        let current = pathname.get();
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <A href=link.href attr:class=link_class(base, &current, link)>
                        {link.name}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 w-full bg-white/80 backdrop-blur-md border-b border-gray-100 z-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <A href="/" attr:class="text-xl font-bold text-gray-900">
                        {SITE.brand}
                    </A>

                    <div class="hidden md:flex items-center space-x-8">
                        {move || links(DESKTOP_LINK)}
                    </div>

                    <button
                        type="button"
                        class="md:hidden p-2 rounded-md text-gray-700 hover:bg-gray-100"
                        aria-label=move || nav.get().button_label()
                        aria-expanded=move || nav.get().is_open().to_string()
                        on:click=move |_| set_nav.update(NavState::toggle)
                    >
                        {move || if nav.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || nav.get().is_open()>
                    <div class="md:hidden">
                        <div
                            class="px-2 pt-2 pb-3 space-y-1 bg-white border-t border-gray-100"
                            on:click=move |_| set_nav.update(NavState::navigate)
                        >
                            {move || links(MOBILE_LINK)}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
