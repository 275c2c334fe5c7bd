//! Authentication flow

use super::*;

impl<A: ProfileApi> SessionController<A> {
    /// Validate the login form, resolve the credentials, then load the
    /// profile.
    ///
    /// Mirrors the signup flow without the numeric normalization. A failing
    /// identity fetch surfaces here while any previously-loaded record stays
    /// visible.
    pub async fn submit_login(&mut self) {
        if self.state.login_flow.is_in_flight() {
            tracing::debug!("login already in flight, ignoring");
            return;
        }

        let request = match self.state.login_form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.state.login_flow.fail(err.to_string());
                return;
            }
        };

        self.state.signup_flow.clear();
        self.state.media_kit_flow.clear();
        self.state.login_flow.begin(MSG_LOGIN_IN_PROGRESS);

        let user_id = match self.api.login(&request).await {
            Ok(response) => response.user_id,
            Err(err) => {
                self.state.login_flow.fail(err.to_string());
                return;
            }
        };

        match self.load_identity(&user_id).await {
            Ok(()) => self.state.login_flow.succeed(MSG_LOGIN_DONE),
            Err(err) => self.state.login_flow.fail(err.to_string()),
        }
    }
}
