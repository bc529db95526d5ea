use crate::{
    api::Grade,
    pages::webinar_signup::{
        components::messages::SubmissionMessage,
        utils::{SignupController, SignupField},
    },
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "flex h-10 w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

#[component]
pub fn SignupForm(
    form: RwSignal<SignupController>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let field_value = move |field: SignupField| form.with(|f| f.field(field).to_string());
    let set_field = move |field: SignupField, value: String| {
        form.update(|f| f.update_field(field, value));
    };
    let submitting = move || form.with(|f| f.is_submitting());
    let status = Signal::derive(move || form.with(|f| f.status()));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <div class="space-y-2">
                <label for="name" class="text-sm font-medium leading-none">"Your Name"</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    required
                    class=INPUT_CLASS
                    placeholder="Jane Smith"
                    prop:value=move || field_value(SignupField::Name)
                    on:input=move |ev| set_field(SignupField::Name, event_target_value(&ev))
                />
            </div>
            <div class="space-y-2">
                <label for="email" class="text-sm font-medium leading-none">"Email Address"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required
                    class=INPUT_CLASS
                    placeholder="jane@example.com"
                    prop:value=move || field_value(SignupField::Email)
                    on:input=move |ev| set_field(SignupField::Email, event_target_value(&ev))
                />
            </div>
            <div class="space-y-2">
                <label for="grade" class="text-sm font-medium leading-none">"Grade Level"</label>
                <select
                    id="grade"
                    name="grade"
                    required
                    class=INPUT_CLASS
                    prop:value=move || field_value(SignupField::Grade)
                    on:change=move |ev| set_field(SignupField::Grade, event_target_value(&ev))
                >
                    <option value="" hidden selected=move || field_value(SignupField::Grade).is_empty()>
                        "Select your grade"
                    </option>
                    {Grade::ALL
                        .into_iter()
                        .map(move |grade| {
                            view! {
                                <option
                                    value=grade.value()
                                    selected=move || field_value(SignupField::Grade) == grade.value()
                                >
                                    {grade.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <button
                type="submit"
                class="inline-flex h-10 w-full items-center justify-center rounded-md bg-blue-500 px-4 py-2 text-sm font-medium text-white hover:bg-blue-600 disabled:opacity-50"
                disabled=submitting
            >
                {move || form.with(|f| f.submit_label())}
            </button>
            <SubmissionMessage status=status/>
        </form>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::{
        api::SignupFormData,
        pages::webinar_signup::utils::{SubmissionFailure, SubmissionStatus},
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_form() -> (RwSignal<SignupController>, HtmlElement) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let host: HtmlElement = document
            .create_element("div")
            .expect("div")
            .dyn_into()
            .expect("html element");
        document
            .body()
            .expect("body")
            .append_child(&host)
            .expect("attach");
        let form = create_rw_signal(SignupController::default());
        mount_to(host.clone(), move || {
            view! { <SignupForm form=form on_submit=move |_: ()| ()/> }
        });
        (form, host)
    }

    fn control<T: JsCast>(host: &HtmlElement, id: &str) -> T {
        host.query_selector(&format!("#{}", id))
            .expect("selector")
            .expect("control")
            .dyn_into()
            .expect("control type")
    }

    fn fire(target: &web_sys::EventTarget, kind: &str) {
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict(kind, &init).expect("event");
        target.dispatch_event(&event).expect("dispatch");
    }

    fn type_jane(host: &HtmlElement) {
        let name: HtmlInputElement = control(host, "name");
        name.set_value("Jane Smith");
        fire(&name, "input");
        let email: HtmlInputElement = control(host, "email");
        email.set_value("jane@example.com");
        fire(&email, "input");
        let grade: HtmlSelectElement = control(host, "grade");
        grade.set_value("8");
        fire(&grade, "change");
    }

    fn control_values(host: &HtmlElement) -> (String, String, String) {
        (
            control::<HtmlInputElement>(host, "name").value(),
            control::<HtmlInputElement>(host, "email").value(),
            control::<HtmlSelectElement>(host, "grade").value(),
        )
    }

    #[wasm_bindgen_test]
    fn typing_updates_each_controller_field() {
        let (form, host) = mount_form();
        type_jane(&host);
        let snapshot = form.get_untracked();
        assert_eq!(
            snapshot.data(),
            &SignupFormData::new("Jane Smith", "jane@example.com", "8")
        );
        assert_eq!(snapshot.status(), SubmissionStatus::Idle);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn error_state_keeps_values_in_controls() {
        let (form, host) = mount_form();
        form.update(|f| {
            f.update_field(SignupField::Name, "Zed Q");
            f.update_field(SignupField::Email, "zed@q.io");
            f.update_field(SignupField::Grade, "11");
            f.begin_submit();
            f.finish_submit(Err(SubmissionFailure::Network("offline".into())));
        });
        assert_eq!(
            control_values(&host),
            ("Zed Q".to_string(), "zed@q.io".to_string(), "11".to_string())
        );
        host.remove();
    }

    #[wasm_bindgen_test]
    fn success_state_clears_controls() {
        let (form, host) = mount_form();
        type_jane(&host);
        form.update(|f| {
            f.begin_submit();
            f.finish_submit(Ok(()));
        });
        assert_eq!(form.get_untracked().status(), SubmissionStatus::Success);
        assert_eq!(
            control_values(&host),
            (String::new(), String::new(), String::new())
        );
        host.remove();
    }
}
