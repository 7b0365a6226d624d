use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    #[default]
    Small,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "w-10 h-10 text-sm",
            AvatarSize::Large => "w-16 h-16 text-lg",
        }
    }
}

/// Initials in a grey circle, standing in for a profile photo.
#[component]
pub fn Avatar(initials: &'static str, #[prop(optional)] size: AvatarSize) -> impl IntoView {
    view! {
        <div class=format!(
            "{} bg-gray-200 rounded-full flex flex-shrink-0 items-center justify-center",
            size.class(),
        )>
            <span class="font-medium text-gray-600">{initials}</span>
        </div>
    }
}

#[component]
pub fn CodeMark() -> impl IntoView {
    view! {
        <div class="w-32 h-32 mx-auto bg-gradient-to-br from-gray-200 to-gray-300 rounded-full flex items-center justify-center mb-8">
            <span class="text-5xl font-mono font-bold text-gray-600">"</>"</span>
        </div>
    }
}
