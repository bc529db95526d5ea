mod api;
mod components;
pub mod config;
mod pages;
pub mod router;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ApiError, Grade, SignupFormData};
pub use pages::webinar_signup::utils::{SignupController, SignupField, SubmissionStatus};

#[cfg(target_arch = "wasm32")]
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Browser entry point: installs the panic hook and console logger, starts
/// resolving the API base URL, then mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    log::info!("Starting WebWizards webinar sign-up (wasm)");

    // Non-blocking; the first submit awaits the same cached value.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}
