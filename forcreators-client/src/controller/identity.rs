//! Identity load sub-sequence shared by signup and login

use crate::error::ApiError;

use super::*;

impl<A: ProfileApi> SessionController<A> {
    /// Fetch the profile record and its dependent content.
    ///
    /// A failing profile fetch is terminal: the error propagates to the
    /// caller's slot and a previously-loaded record is kept as-is. Once the
    /// record is replaced, the tips fetch runs best-effort; its failure
    /// clears the tips but never the parent flow's outcome. Under the eager
    /// policy the media kit is refreshed here too, same best-effort rule,
    /// except a previous snapshot is kept on failure.
    pub(super) async fn load_identity(&mut self, user_id: &str) -> Result<(), ApiError> {
        let user = self.api.fetch_user(user_id).await?;
        self.state.user = Some(user);

        match self.api.fetch_profile_tips(user_id).await {
            Ok(tips) => self.state.tips = TipsState::Loaded(tips),
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "profile tips fetch failed");
                self.state.tips = TipsState::Unavailable;
            }
        }

        if self.policy == FetchPolicy::EagerMediaKit {
            match self.api.fetch_media_kit(user_id).await {
                Ok(kit) => self.state.media_kit = Some(kit),
                Err(err) => {
                    tracing::warn!(user_id = %user_id, error = %err, "eager media kit fetch failed");
                }
            }
        }

        Ok(())
    }
}
