use super::{
    repository::SignupRepository,
    utils::{SignupController, SignupField},
};
use crate::api::{ApiClient, SignupFormData};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub form: RwSignal<SignupController>,
    pub submit_action: Action<SignupFormData, ()>,
}

impl SignupViewModel {
    pub fn update_field(&self, field: SignupField, value: String) {
        self.form.update(|form| form.update_field(field, value));
    }

    /// Flips the form to `Submitting` before the request is dispatched.
    pub fn submit(&self) {
        if let Some(payload) = begin_submission(self.form) {
            self.submit_action.dispatch(payload);
        }
    }
}

pub fn begin_submission(form: RwSignal<SignupController>) -> Option<SignupFormData> {
    form.try_update(SignupController::begin_submit).flatten()
}

pub async fn complete_submission(
    repo: &SignupRepository,
    payload: SignupFormData,
    form: RwSignal<SignupController>,
) {
    let result = repo.sign_up(&payload).await;
    form.update(|form| form.finish_submit(result));
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignupRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(SignupController::default());

    let submit_action = create_action(move |payload: &SignupFormData| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { complete_submission(&repo, payload, form).await }
    });

    SignupViewModel {
        form,
        submit_action,
    }
}
