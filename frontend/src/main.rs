fn main() {
    #[cfg(target_arch = "wasm32")]
    webinar_signup_frontend::start();
}
