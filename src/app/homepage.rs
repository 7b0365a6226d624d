use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::avatar::CodeMark;
use super::ui::{Badge, BadgeVariant, BUTTON_OUTLINE, BUTTON_PRIMARY, CARD};
use crate::content::{FeaturedProject, FEATURED_PROJECTS, SITE, SKILLS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="min-h-screen">
            <Hero />
            <About />
            <FeaturedProjects />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-20 lg:py-32">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="mb-8">
                    <CodeMark />
                </div>
                <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {SITE.author.name}
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto">
                    {SITE.author.bio}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <A href="/portfolio" attr:class=BUTTON_PRIMARY>
                        "View My Work →"
                    </A>
                    <A href="/blog" attr:class=BUTTON_OUTLINE>
                        "Read My Blog"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-6">
                            "Building digital experiences that matter"
                        </h2>
                        <p class="text-lg text-gray-600 mb-6">
                            "With over 5 years of experience in full-stack development, I specialize in creating scalable web applications that solve real-world problems. I'm passionate about clean code, user experience, and continuous learning."
                        </p>
                        <p class="text-lg text-gray-600 mb-8">
                            "When I'm not coding, you'll find me exploring new technologies, contributing to open source projects, or sharing knowledge through my blog."
                        </p>
                        <div class="flex items-center space-x-4 text-sm text-gray-600">
                            <div class="flex items-center">"🚀 5+ Years Experience"</div>
                            <div class="flex items-center">"❤️ 50+ Projects Completed"</div>
                        </div>
                    </div>
                    <div class="space-y-6">
                        <div class=CARD>
                            <div class="p-6">
                                <h3 class="font-semibold text-gray-900 mb-4">
                                    "Technologies I Love"
                                </h3>
                                <div class="flex flex-wrap gap-2">
                                    {SKILLS
                                        .iter()
                                        .map(|skill| view! { <Badge text=*skill /> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                        <div class=CARD>
                            <div class="p-6">
                                <h3 class="font-semibold text-gray-900 mb-4">"Current Focus"</h3>
                                <p class="text-gray-600">
                                    "Building scalable web applications with modern React patterns, exploring serverless architectures, and contributing to open source."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedProjects() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                        "Featured Projects"
                    </h2>
                    <p class="text-lg text-gray-600">"A selection of my recent work"</p>
                </div>
                <div class="grid md:grid-cols-2 gap-8 mb-12">
                    {FEATURED_PROJECTS
                        .iter()
                        .map(|project| view! { <FeaturedCard project /> })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <A href="/portfolio" attr:class=BUTTON_OUTLINE>
                        "View All Projects →"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(project: &'static FeaturedProject) -> impl IntoView {
    view! {
        <div class=CARD>
            <div class="aspect-video bg-gray-100"></div>
            <div class="p-6">
                <h3 class="font-semibold text-xl text-gray-900 mb-2">{project.title}</h3>
                <p class="text-gray-600 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| view! { <Badge text=*tech variant=BadgeVariant::Outline /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
