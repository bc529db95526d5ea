//! Inline stroke icons in the lucide style (24x24 viewBox, 2px stroke).

use leptos::*;

#[component]
fn StrokeIcon(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn CodeIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <polyline points="16 18 22 12 16 6"></polyline>
            <polyline points="8 6 2 12 8 18"></polyline>
        </StrokeIcon>
    }
}

#[component]
pub fn CalendarIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <rect x="3" y="4" width="18" height="18" rx="2" ry="2"></rect>
            <line x1="16" y1="2" x2="16" y2="6"></line>
            <line x1="8" y1="2" x2="8" y2="6"></line>
            <line x1="3" y1="10" x2="21" y2="10"></line>
        </StrokeIcon>
    }
}

#[component]
pub fn ClockIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <circle cx="12" cy="12" r="10"></circle>
            <polyline points="12 6 12 12 16 14"></polyline>
        </StrokeIcon>
    }
}

#[component]
pub fn LayoutIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect>
            <line x1="3" y1="9" x2="21" y2="9"></line>
            <line x1="9" y1="21" x2="9" y2="9"></line>
        </StrokeIcon>
    }
}

#[component]
pub fn MonitorIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <rect x="2" y="3" width="20" height="14" rx="2" ry="2"></rect>
            <line x1="8" y1="21" x2="16" y2="21"></line>
            <line x1="12" y1="17" x2="12" y2="21"></line>
        </StrokeIcon>
    }
}

#[component]
pub fn MenuIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <line x1="4" y1="6" x2="20" y2="6"></line>
            <line x1="4" y1="12" x2="20" y2="12"></line>
            <line x1="4" y1="18" x2="20" y2="18"></line>
        </StrokeIcon>
    }
}

#[component]
pub fn CloseIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <line x1="18" y1="6" x2="6" y2="18"></line>
            <line x1="6" y1="6" x2="18" y2="18"></line>
        </StrokeIcon>
    }
}
