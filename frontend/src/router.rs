use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::pages::WebinarSignupPage;

pub const ROUTE_PATHS: &[&str] = &["/", "/webinar"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=WebinarSignupPage/>
                <Route path="/webinar" view=WebinarSignupPage/>
            </Routes>
        </Router>
    }
}
