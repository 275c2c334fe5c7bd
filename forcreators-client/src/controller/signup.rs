//! Registration flow

use super::*;

impl<A: ProfileApi> SessionController<A> {
    /// Validate the signup form, create the account, then load the new
    /// profile.
    ///
    /// Validation failures set the signup slot without touching the network
    /// or the sibling slots. Once the flow starts, the login and media-kit
    /// slots are cleared so no stale unrelated text stays visible.
    pub async fn submit_signup(&mut self) {
        if self.state.signup_flow.is_in_flight() {
            tracing::debug!("signup already in flight, ignoring");
            return;
        }

        let request = match self.state.signup_form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.state.signup_flow.fail(err.to_string());
                return;
            }
        };

        self.state.login_flow.clear();
        self.state.media_kit_flow.clear();
        self.state.signup_flow.begin(MSG_SIGNUP_IN_PROGRESS);

        let user_id = match self.api.signup(&request).await {
            Ok(response) => response.user_id,
            Err(err) => {
                self.state.signup_flow.fail(err.to_string());
                return;
            }
        };

        tracing::debug!(user_id = %user_id, "account created");

        match self.load_identity(&user_id).await {
            Ok(()) => self.state.signup_flow.succeed(MSG_SIGNUP_DONE),
            Err(err) => self.state.signup_flow.fail(err.to_string()),
        }
    }
}
