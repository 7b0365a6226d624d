use leptos::prelude::*;

use crate::content::{SITE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-50 border-t border-gray-100">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <p class="text-gray-600 text-sm">
                            "© 2024 " {SITE.brand} ". Building the future, one line at a time."
                        </p>
                    </div>
                    <div class="flex space-x-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="text-xl text-gray-400 hover:text-gray-600 transition-colors"
                                        aria-label=link.name
                                    >
                                        <i class=link.kind.icon_class()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
