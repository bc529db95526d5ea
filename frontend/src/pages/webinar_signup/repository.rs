use super::utils::SubmissionFailure;
use crate::api::{ApiClient, SignupFormData};
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupRepository {
    client: Rc<ApiClient>,
}

impl SignupRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn sign_up(&self, form: &SignupFormData) -> Result<(), SubmissionFailure> {
        self.client
            .signup_for_webinar(form)
            .await
            .map_err(SubmissionFailure::from)
    }
}
