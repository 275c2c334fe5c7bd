//! Media-kit regeneration flow

use super::*;

impl<A: ProfileApi> SessionController<A> {
    /// Fetch a fresh media-kit snapshot for the loaded profile.
    ///
    /// Requires a loaded profile; without one the slot gets an instructive
    /// message and no call is made. On failure the previous snapshot stays
    /// visible. Sibling slots are never touched by this flow.
    pub async fn regenerate_media_kit(&mut self) {
        if self.state.media_kit_flow.is_in_flight() {
            tracing::debug!("media kit regeneration already in flight, ignoring");
            return;
        }

        let Some(user_id) = self.state.user.as_ref().map(|u| u.user_id.clone()) else {
            self.state.media_kit_flow.fail(MSG_MEDIA_KIT_NEEDS_ACCOUNT);
            return;
        };

        self.state.media_kit_flow.begin(MSG_MEDIA_KIT_IN_PROGRESS);

        match self.api.fetch_media_kit(&user_id).await {
            Ok(kit) => {
                self.state.media_kit = Some(kit);
                self.state.media_kit_flow.succeed(MSG_MEDIA_KIT_DONE);
            }
            Err(err) => self.state.media_kit_flow.fail(err.to_string()),
        }
    }
}
