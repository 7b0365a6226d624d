mod avatar;
mod blog;
mod footer;
mod header;
mod homepage;
mod portfolio;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE;
use blog::{BlogHome, BlogPage};
use footer::Footer;
use header::Header;
use homepage::HomePage;
use portfolio::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="RSS Feed"
                    href="/rss.xml"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", SITE.author.name) />

        <Router>
            <div class="min-h-screen flex flex-col bg-white text-gray-900">
                <Header />
                <main class="flex-grow pt-16">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/portfolio") view=PortfolioPage />
                        <Route path=path!("/blog") view=BlogHome />
                        <Route path=path!("/blog/:id") view=BlogPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="max-w-6xl mx-auto px-4 py-32 text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-gray-600 mb-8">"Page not found."</p>
            <A href="/" attr:class="text-blue-600 hover:text-blue-700">
                "Back home"
            </A>
        </div>
    }
}
