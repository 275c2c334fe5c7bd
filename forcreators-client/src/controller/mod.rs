//! Session controller
//!
//! Owns the whole screen state and the four user-action flows (signup,
//! login, media-kit regeneration, contact). Rendering code reads the state
//! and the derived [`crate::DashboardView`]; every mutation goes through an
//! operation here.

mod contact;
mod identity;
mod login;
mod media_kit;
mod signup;

use serde::{Deserialize, Serialize};

use crate::api::ProfileApi;
use crate::config::{ClientConfig, FetchPolicy};
use crate::forms::{ContactForm, LoginForm, SignupForm};
use shared::models::{MediaKit, ProfileTips, UserRecord};

// Status text shown while a flow is running and after it settles.
pub const MSG_SIGNUP_IN_PROGRESS: &str = "Creo l'account e calcolo il segmento...";
pub const MSG_SIGNUP_DONE: &str = "Account creato. Segmento calcolato.";
pub const MSG_LOGIN_IN_PROGRESS: &str = "Verifico i dati di accesso...";
pub const MSG_LOGIN_DONE: &str = "Accesso effettuato.";
pub const MSG_MEDIA_KIT_NEEDS_ACCOUNT: &str = "Crea o carica prima un account.";
pub const MSG_MEDIA_KIT_IN_PROGRESS: &str = "Genero il media kit con i prezzi suggeriti...";
pub const MSG_MEDIA_KIT_DONE: &str = "Media kit aggiornato.";
pub const MSG_CONTACT_IN_PROGRESS: &str = "Invio del messaggio in corso...";
pub const MSG_CONTACT_DONE: &str = "Messaggio inviato, ti risponderemo via email.";

/// Lifecycle of one flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPhase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Status slot of one flow: lifecycle phase plus the text shown to the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowSlot {
    pub phase: FlowPhase,
    pub message: String,
}

impl FlowSlot {
    /// Reset to idle with no visible text
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == FlowPhase::InFlight
    }

    fn begin(&mut self, message: &str) {
        self.phase = FlowPhase::InFlight;
        self.message = message.to_string();
    }

    fn succeed(&mut self, message: &str) {
        self.phase = FlowPhase::Succeeded;
        self.message = message.to_string();
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.phase = FlowPhase::Failed;
        self.message = message.into();
    }
}

/// Client-side tips state
///
/// `Unavailable` records a failed fetch; it renders exactly like
/// `NotRequested` but keeps the distinction observable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "tips", rename_all = "snake_case")]
pub enum TipsState {
    #[default]
    NotRequested,
    Unavailable,
    Loaded(ProfileTips),
}

impl TipsState {
    pub fn loaded(&self) -> Option<&ProfileTips> {
        match self {
            TipsState::Loaded(tips) => Some(tips),
            _ => None,
        }
    }
}

/// Full screen state owned by one controller instance
///
/// Serializable, so a screen can snapshot it and a later controller can
/// resume from the snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    // Raw user input
    pub signup_form: SignupForm,
    pub login_form: LoginForm,
    pub contact_form: ContactForm,

    // Server-derived records, replaced wholesale on every refetch
    pub user: Option<UserRecord>,
    pub media_kit: Option<MediaKit>,
    pub tips: TipsState,

    // Independent status slots, one per flow
    pub signup_flow: FlowSlot,
    pub login_flow: FlowSlot,
    pub media_kit_flow: FlowSlot,
    pub contact_flow: FlowSlot,
}

/// Orchestrates the user-action flows over a [`ProfileApi`] implementation.
pub struct SessionController<A: ProfileApi> {
    api: A,
    policy: FetchPolicy,
    state: DashboardState,
}

impl<A: ProfileApi> SessionController<A> {
    /// Create a controller with an explicit media-kit fetch policy
    pub fn new(api: A, policy: FetchPolicy) -> Self {
        Self {
            api,
            policy,
            state: DashboardState::default(),
        }
    }

    /// Create a controller taking the fetch policy from the configuration
    pub fn with_config(api: A, config: &ClientConfig) -> Self {
        Self::new(api, config.fetch_policy)
    }

    /// Resume from a previously-captured state snapshot
    pub fn from_state(api: A, policy: FetchPolicy, state: DashboardState) -> Self {
        Self { api, policy, state }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Signup input fields
    pub fn signup_form_mut(&mut self) -> &mut SignupForm {
        &mut self.state.signup_form
    }

    /// Login input fields
    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.state.login_form
    }

    /// Contact input fields
    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.state.contact_form
    }

    /// Derive the display-ready dashboard from the current state
    pub fn view(&self) -> crate::view::DashboardView {
        crate::view::DashboardView::from_state(&self.state)
    }
}
