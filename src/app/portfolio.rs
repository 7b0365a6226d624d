use leptos::prelude::*;
use leptos_meta::Title;

use super::ui::{Badge, BadgeVariant, BUTTON_PRIMARY, CARD};
use crate::content::{Project, PROJECTS, SITE};
use crate::filter::{filter_projects, CategoryFilter};

const CHOICE_ACTIVE: &str = "inline-flex items-center rounded-md px-4 py-2 mb-2 text-sm font-medium text-white bg-gray-900 transition-colors";
const CHOICE_IDLE: &str = "inline-flex items-center rounded-md px-4 py-2 mb-2 text-sm font-medium border border-gray-200 bg-white hover:bg-gray-100 transition-colors";

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (category, set_category) = signal(CategoryFilter::All);
    let projects = Memo::new(move |_| filter_projects(PROJECTS, category.get()));

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "My Portfolio"
                    </h1>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "A collection of projects that showcase my skills in full-stack development, from concept to deployment."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-2 mb-12">
                    {CategoryFilter::CHOICES
                        .into_iter()
                        .map(|choice| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if category.get() == choice { CHOICE_ACTIVE } else { CHOICE_IDLE }
                                    }
                                    aria-pressed=move || (category.get() == choice).to_string()
                                    on:click=move |_| set_category.set(choice)
                                >
                                    <span class="mr-2">"⛃"</span>
                                    {choice.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || projects.get()
                        key=|project| project.id
                        children=|project| view! { <ProjectCard project /> }
                    />
                </div>

                <div class="text-center mt-20">
                    <h2 class="text-2xl font-bold text-gray-900 mb-4">
                        "Interested in working together?"
                    </h2>
                    <p class="text-gray-600 mb-8">
                        "I'm always open to discussing new opportunities and interesting projects."
                    </p>
                    <a href=format!("mailto:{}", SITE.email) class=BUTTON_PRIMARY>
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class=format!("{CARD} group")>
            <div class="aspect-video bg-gray-100 relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-br from-blue-500/20 to-purple-500/20 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center">
                    <div class="flex space-x-4">
                        <a
                            href=project.demo_url
                            class="p-2 bg-white rounded-full shadow-lg hover:shadow-xl transition-shadow"
                            aria-label="View Demo"
                        >
                            "↗"
                        </a>
                        <a
                            href=project.github_url
                            class="p-2 bg-white rounded-full shadow-lg hover:shadow-xl transition-shadow"
                            aria-label="View Code"
                        >
                            <i class="devicon-github-plain text-gray-700"></i>
                        </a>
                    </div>
                </div>
            </div>
            <div class="p-6">
                <div class="flex items-center justify-between mb-2">
                    <h3 class="font-semibold text-xl text-gray-900">{project.title}</h3>
                    <Badge text=project.category.label() small=true />
                </div>
                <p class="text-gray-600 mb-4 text-sm leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-1">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! { <Badge text=*tech variant=BadgeVariant::Outline small=true /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
