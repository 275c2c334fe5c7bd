//! Contact flow

use super::*;

impl<A: ProfileApi> SessionController<A> {
    /// Submit the contact form.
    ///
    /// Independent of the profile flows: owns its own slot and never reads
    /// or clears the others. The fields are emptied only after a successful
    /// send, so a failed attempt can be retried as typed.
    pub async fn submit_contact(&mut self) {
        if self.state.contact_flow.is_in_flight() {
            tracing::debug!("contact submission already in flight, ignoring");
            return;
        }

        let request = match self.state.contact_form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.state.contact_flow.fail(err.to_string());
                return;
            }
        };

        self.state.contact_flow.begin(MSG_CONTACT_IN_PROGRESS);

        match self.api.send_contact(&request).await {
            Ok(()) => {
                self.state.contact_form.clear();
                self.state.contact_flow.succeed(MSG_CONTACT_DONE);
            }
            Err(err) => self.state.contact_flow.fail(err.to_string()),
        }
    }
}
