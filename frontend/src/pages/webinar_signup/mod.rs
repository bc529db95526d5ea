use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::WebinarSignupPanel;

#[component]
pub fn WebinarSignupPage() -> impl IntoView {
    view! { <WebinarSignupPanel /> }
}
