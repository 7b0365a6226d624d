use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

use super::avatar::{Avatar, AvatarSize};
use super::ui::{Badge, BadgeVariant, BUTTON_SMALL_OUTLINE, CARD};
#[cfg(feature = "ssr")]
use crate::blog::get_post;
use crate::blog::{parse_post_id, Post, PostMeta, GLOBAL_POST_CACHE};
use crate::content::{all_tags, BlogPost, SITE};
use crate::filter::{listing, SearchTerm};

#[component]
pub fn BlogHome() -> impl IntoView {
    let (search, set_search) = signal(SearchTerm::default());
    let page = Memo::new(move |_| search.with(listing));

    view! {
        <Title text="Blog" />
        <div class="min-h-screen py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        <a
                            href="/blog"
                            on:click=move |_| set_search.set(SearchTerm::default())
                            class="hover:text-blue-600 transition-colors"
                        >
                            "My Blog"
                        </a>
                        <a
                            href="/rss.xml"
                            target="_blank"
                            rel="external"
                            class="relative -top-1 ml-4 text-2xl text-orange-500 hover:text-orange-600"
                            aria-label="RSS Feed"
                        >
                            <i class="extra-rss" />
                        </a>
                    </h1>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">{SITE.blog_description}</p>
                </div>

                <div class="mb-12">
                    <div class="relative max-w-md mx-auto">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">
                            "🔍"
                        </span>
                        <input
                            id="blog_search"
                            type="text"
                            placeholder="Search articles..."
                            class="w-full pl-10 pr-4 py-2 rounded-md border border-gray-200 focus:outline-none focus:ring-2 focus:ring-gray-900"
                            prop:value=move || search.with(|t| t.as_str().to_string())
                            on:input=move |ev| set_search.set(SearchTerm::new(event_target_value(&ev)))
                        />
                    </div>
                </div>

                {move || page.with(|p| p.featured).map(|post| view! { <FeaturedArticle post /> })}

                <div class="mb-16">
                    <h2 class="text-2xl font-bold text-gray-900 mb-6">
                        {move || page.with(|p| p.heading.clone())}
                    </h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For
                            each=move || page.with(|p| p.posts.clone())
                            key=|post| post.id
                            children=|post| view! { <PostCard post /> }
                        />
                    </div>
                    <Show when=move || page.with(|p| p.searching && p.posts.is_empty())>
                        <p class="text-center text-gray-500 py-8">
                            "No articles match \"" {move || search.with(|t| t.as_str().to_string())}
                            "\"."
                        </p>
                    </Show>
                </div>

                <div class="text-center">
                    <h2 class="text-2xl font-bold text-gray-900 mb-6">"Popular Topics"</h2>
                    <div class="flex flex-wrap justify-center gap-2">
                        {all_tags()
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <button
                                        type="button"
                                        class=format!("{BUTTON_SMALL_OUTLINE} mb-2")
                                        on:click=move |_| set_search.set(SearchTerm::new(tag))
                                    >
                                        {tag}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PostDate(post: &'static BlogPost) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4 text-sm text-gray-500">
            <span>"📅 " {post.short_date()}</span>
            <span>"⏱ " {post.read_time}</span>
        </div>
    }
}

#[component]
fn FeaturedArticle(post: &'static BlogPost) -> impl IntoView {
    view! {
        <div class="mb-16">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">"Featured Article"</h2>
            <div class=CARD>
                <div class="md:flex">
                    <div class="md:w-1/3 aspect-video md:aspect-auto bg-gradient-to-br from-blue-500 to-purple-600"></div>
                    <div class="md:w-2/3 p-8">
                        <div class="mb-4">
                            <PostDate post />
                        </div>
                        <h3 class="text-2xl font-bold text-gray-900 mb-4">{post.title}</h3>
                        <p class="text-gray-600 mb-6 leading-relaxed">{post.excerpt}</p>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {post.tags.iter().map(|tag| view! { <Badge text=*tag /> }).collect_view()}
                        </div>
                        <A
                            href=post.href()
                            attr:class="inline-flex items-center rounded-md px-4 py-2 text-sm font-medium text-white bg-gray-900 hover:bg-gray-800"
                        >
                            "Read More →"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PostCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <div class=format!("{CARD} group")>
            <div class="aspect-video bg-gradient-to-br from-gray-200 to-gray-300"></div>
            <div class="p-6">
                <div class="mb-3">
                    <PostDate post />
                </div>
                <h3 class="font-semibold text-lg text-gray-900 mb-3 group-hover:text-blue-600 transition-colors">
                    {post.title}
                </h3>
                <p class="text-gray-600 mb-4 text-sm leading-relaxed">{post.excerpt}</p>
                <div class="flex flex-wrap gap-1 mb-4">
                    {post
                        .tags
                        .iter()
                        .map(|tag| view! { <Badge text=*tag variant=BadgeVariant::Outline small=true /> })
                        .collect_view()}
                </div>
                <A href=post.href() attr:class="text-sm font-medium text-blue-600 hover:text-blue-700">
                    "Read More →"
                </A>
            </div>
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn get_post_server(id: u32) -> Result<Post, ServerFnError> {
    get_post(id).map_err(|e| ServerFnError::new(e.to_string()))
}

async fn load_post(raw: String) -> Result<Post, ServerFnError> {
    let id = parse_post_id(&raw).map_err(|e| ServerFnError::new(e.to_string()))?;
    let cached = GLOBAL_POST_CACHE.get(&id).map(|p| p.value().clone());
    if let Some(p) = cached {
        return Ok(p);
    }
    let post = get_post_server(id).await?;
    // the server fills the cache inside get_post
    #[cfg(feature = "hydrate")]
    GLOBAL_POST_CACHE.insert(id, post.clone());
    Ok(post)
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let raw_id = move || params.get().get("id").unwrap_or_default();
    let post = Resource::new(raw_id, load_post);

    view! {
        <div class="min-h-screen py-20">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <A href="/blog" attr:class="inline-flex items-center text-gray-700 hover:text-gray-900">
                        "← Back to Blog"
                    </A>
                </div>
                <Suspense fallback=move || {
                    view! {
                        <div class="space-y-4 animate-pulse">
                            <div class="h-12 bg-gray-100 rounded"></div>
                            <div class="h-6 bg-gray-100 rounded w-1/2"></div>
                            <div class="h-64 bg-gray-100 rounded"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match post.await {
                            Ok(p) => Either::Left(view! { <Article post=p /> }),
                            Err(e) => {
                                log::debug!("blog post unavailable: {e}");
                                Either::Right(view! { <PostNotFound /> })
                            }
                        }
                    })}
                </Suspense>
            </div>
        </div>
    }
}

#[component]
fn PostNotFound() -> impl IntoView {
    view! {
        <Title text="Post not found" />
        <div class="py-16 text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">"Post not found"</h1>
            <p class="text-gray-600 mb-8">"That article doesn't exist or has been moved."</p>
            <A href="/blog" attr:class="text-blue-600 hover:text-blue-700">
                "Browse all articles"
            </A>
        </div>
    }
}

#[component]
fn Article(post: Post) -> impl IntoView {
    let Post { meta, content } = post;
    let PostMeta {
        id,
        title,
        date,
        long_date,
        read_time,
        tags,
        author: author_name,
        ..
    } = meta;
    let author = SITE.author;
    view! {
        <Title text=title.clone() />
        <header class="mb-12">
            <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6 leading-tight">
                {title}
            </h1>
            <div class="flex flex-wrap items-center gap-6 text-sm text-gray-600 mb-6">
                <span>"📅 " <time datetime=date>{long_date}</time></span>
                <span>"⏱ " {read_time}</span>
            </div>
            <div class="flex flex-wrap gap-2 mb-8">
                {tags.into_iter().map(|tag| view! { <Badge text=tag /> }).collect_view()}
            </div>
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <Avatar initials=author.initials />
                    <div>
                        <p class="font-medium text-gray-900">{author_name.clone()}</p>
                        <p class="text-sm text-gray-600">{author.role}</p>
                    </div>
                </div>
                <ShareButtons />
            </div>
        </header>

        <hr class="mb-12 border-gray-200" />

        <article id=format!("post-{id}") class="prose prose-lg max-w-none text-gray-700">
            <div inner_html=content></div>
        </article>

        <footer class="mt-16 pt-8 border-t border-gray-200">
            <ShareButtons />
            <div class="mt-8 p-6 bg-gray-50 rounded-lg">
                <div class="flex items-center space-x-4">
                    <Avatar initials=author.initials size=AvatarSize::Large />
                    <div>
                        <h3 class="font-semibold text-gray-900">{author_name.clone()}</h3>
                        <p class="text-gray-600 mb-2">{author.bio}</p>
                        <A href="/blog" attr:class="text-sm text-blue-600 hover:text-blue-700">
                            "More articles by " {author_name}
                        </A>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ShareButtons() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <button type="button" class=BUTTON_SMALL_OUTLINE>
                "♡ Like"
            </button>
            <button type="button" class=BUTTON_SMALL_OUTLINE>
                "⇪ Share"
            </button>
        </div>
    }
}
