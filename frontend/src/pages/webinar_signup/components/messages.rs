use crate::pages::webinar_signup::utils::{status_message, SubmissionStatus};
use leptos::*;

#[component]
pub fn SubmissionMessage(#[prop(into)] status: MaybeSignal<SubmissionStatus>) -> impl IntoView {
    move || {
        let current = status.get();
        status_message(current).map(|text| {
            let (class, role) = if current == SubmissionStatus::Success {
                ("text-green-600", "status")
            } else {
                ("text-red-600", "alert")
            };
            view! { <p class=class role=role>{text}</p> }
        })
    }
}
