use crate::api::ApiClient;
use leptos::*;
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Runs `f` on a current-thread tokio runtime inside a `LocalSet`, which is
/// where Leptos `spawn_local` (and so `Action::dispatch`) puts its futures.
pub fn with_local_runtime_async<F, Fut>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    tokio::task::LocalSet::new().block_on(&runtime, f());
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders a whole page with the contexts the router root would provide.
/// The API client points at an address nothing listens on.
pub fn render_page_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        leptos_meta::provide_meta_context();
        provide_context(ApiClient::new_with_base_url("http://127.0.0.1:9/api"));
        view()
    })
}

/// Whether the `<option value="{value}">` in `html` carries `selected`;
/// `None` when no such option was rendered.
pub fn option_selected(html: &str, value: &str) -> Option<bool> {
    let needle = format!("value=\"{}\"", value);
    html.split("<option")
        .skip(1)
        .map(|rest| rest.split('>').next().unwrap_or(rest))
        .find(|tag| tag.contains(&needle))
        .map(|tag| tag.contains("selected"))
}
