use super::{
    components::{form::SignupForm, hero::WebinarHero},
    view_model::use_signup_view_model,
};
use crate::components::layout::{Footer, Header};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn WebinarSignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();

    view! {
        <Title text="WebWizards | Learn HTML & CSS"/>
        <div class="flex flex-col min-h-screen bg-gradient-to-b from-blue-100 to-purple-100">
            <Header/>
            <main class="flex-1">
                <section class="w-full py-12 md:py-24 lg:py-32">
                    <div class="container px-4 md:px-6 mx-auto">
                        <WebinarHero/>
                        <div class="w-full max-w-2xl mx-auto">
                            <div class="flex flex-col gap-4 p-6 md:p-8 bg-white rounded-3xl shadow-lg border border-gray-200">
                                <div class="space-y-2">
                                    <h2 class="text-2xl font-bold text-blue-600">"Sign Up Now!"</h2>
                                    <p class="text-sm text-gray-500">
                                        "Ready to start your coding adventure? Fill out this form to join our webinar!"
                                    </p>
                                </div>
                                <SignupForm form={vm.form} on_submit=move |_: ()| vm.submit()/>
                            </div>
                        </div>
                    </div>
                </section>
            </main>
            <Footer/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_page_to_string;

    #[test]
    fn panel_renders_header_hero_form_and_footer() {
        let html = render_page_to_string(|| view! { <WebinarSignupPanel/> });
        assert!(html.contains("WebWizards"));
        assert!(html.contains("Build Your First Website!"));
        assert!(html.contains("Sign Up Now!"));
        assert!(html.contains("Join the Webinar"));
        assert!(html.contains("Privacy Policy"));
    }
}
