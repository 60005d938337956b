//! Session/setup lifecycle controller.
//!
//! One controller owns all lifecycle state; views read it through
//! accessors and mutate it only by dispatching the intent methods below.
//! Every write follows the same asymmetry: commit to local state first,
//! then attempt a best-effort remote sync, reporting failure through the
//! notice side-channel without rolling the local change back. Local state
//! is authoritative; the backend is a convenience cache.

use voltura_core::calc::MonthlySummary;
use voltura_core::{SetupProfile, UserProfile};

use crate::demo;
use crate::gateway::{GatewayError, Session, SignupData, StorageGateway};

/// View selector. Purely informational: screens never gate business
/// rules, the controller navigates optimistically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Setup,
    Dashboard,
    Recommendations,
    Reports,
}

/// Notice severity, mirroring toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// A transient message for the UI to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// The identity the controller is acting as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub profile: UserProfile,
}

/// Lifecycle state machine over a storage gateway.
pub struct LifecycleController<G> {
    gateway: G,

    authenticated: bool,
    setup_complete: bool,
    session: Option<Session>,
    setup: Option<SetupProfile>,
    account: Option<Account>,
    profile: UserProfile,
    screen: Screen,

    signup_error: Option<String>,
    login_error: Option<String>,
    signup_in_flight: bool,
    login_in_flight: bool,

    notices: Vec<Notice>,
}

impl<G: StorageGateway> LifecycleController<G> {
    /// Create a controller on the login screen with no state.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            authenticated: false,
            setup_complete: false,
            session: None,
            setup: None,
            account: None,
            profile: UserProfile::default(),
            screen: Screen::Login,
            signup_error: None,
            login_error: None,
            signup_in_flight: false,
            login_in_flight: false,
            notices: Vec::new(),
        }
    }

    // Read accessors.

    #[must_use]
    pub const fn authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub const fn setup_complete(&self) -> bool {
        self.setup_complete
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn setup(&self) -> Option<&SetupProfile> {
        self.setup.as_ref()
    }

    #[must_use]
    pub const fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Dashboard metrics for the current household, if one is set.
    #[must_use]
    pub fn monthly_summary(&self) -> Option<MonthlySummary> {
        self.setup.as_ref().map(MonthlySummary::from_profile)
    }

    #[must_use]
    pub fn signup_error(&self) -> Option<&str> {
        self.signup_error.as_deref()
    }

    #[must_use]
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// Drain pending notices for display.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // Intents.

    /// Navigate between screens. Moving to the auth screens clears any
    /// lingering form errors.
    pub fn navigate(&mut self, screen: Screen) {
        if matches!(screen, Screen::Login | Screen::Signup) {
            self.signup_error = None;
            self.login_error = None;
        }
        self.screen = screen;
    }

    /// Register a new account and route to setup.
    ///
    /// Double submission is blocked by an in-flight guard; the guard is
    /// cleared on every exit path.
    pub async fn signup(&mut self, data: SignupData) {
        if self.signup_in_flight {
            return;
        }
        self.signup_in_flight = true;
        self.signup_error = None;

        self.signup_inner(data).await;

        self.signup_in_flight = false;
    }

    async fn signup_inner(&mut self, data: SignupData) {
        match self.gateway.create_account(&data).await {
            Ok(_) => {}
            Err(GatewayError::UserExists) => {
                self.signup_error = Some(
                    "This email is already registered. Please login instead or use a different email."
                        .to_owned(),
                );
                self.notices
                    .push(Notice::error("Email already registered"));
                return;
            }
            Err(err) if err.is_connectivity() => {
                tracing::warn!(error = %err, "Signup failed: backend unreachable");
                self.signup_error = Some("Connection error. Please try again.".to_owned());
                self.notices.push(Notice::error("Connection error"));
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Signup rejected");
                self.signup_error = Some(err.to_string());
                self.notices.push(Notice::error("Signup failed"));
                return;
            }
        }

        // Sign in immediately to obtain a session. The account exists
        // either way, so a failure here is tolerated.
        match self.gateway.authenticate(&data.email, &data.password).await {
            Ok((_, session)) => self.session = Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "Account created but auto-login failed");
            }
        }

        let profile = UserProfile {
            name: data.name.clone(),
            email: data.email.clone(),
            company: data.company,
            phone: data.phone,
        };
        self.account = Some(Account {
            email: data.email,
            profile: profile.clone(),
        });
        self.profile = profile;
        self.authenticated = true;
        self.notices
            .push(Notice::success(format!("Welcome, {}", data.name)));
        self.screen = Screen::Setup;
    }

    /// Authenticate and load any previously saved household.
    ///
    /// The demo credentials are checked first and bypass the gateway
    /// entirely, so the demo account works with no backend at all.
    pub async fn login(&mut self, email: &str, password: &str) {
        if self.login_in_flight {
            return;
        }
        self.login_in_flight = true;
        self.login_error = None;

        self.login_inner(email, password).await;

        self.login_in_flight = false;
    }

    async fn login_inner(&mut self, email: &str, password: &str) {
        if demo::is_demo_login(email, password) {
            let profile = demo::demo_profile();
            self.account = Some(Account {
                email: demo::DEMO_EMAIL.to_owned(),
                profile: profile.clone(),
            });
            self.profile = profile;
            self.setup = Some(demo::demo_setup());
            self.authenticated = true;
            self.setup_complete = true;
            self.notices.push(Notice::success("Welcome back"));
            self.screen = Screen::Dashboard;
            return;
        }

        let (remote, session) = match self.gateway.authenticate(email, password).await {
            Ok(ok) => ok,
            Err(err) if err.is_connectivity() => {
                tracing::warn!(error = %err, "Login failed: backend unreachable");
                self.login_error = Some("Connection error. Please try again.".to_owned());
                self.notices.push(Notice::error("Connection error"));
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Login rejected");
                self.login_error = Some("Invalid email or password".to_owned());
                self.notices.push(Notice::error("Login failed"));
                return;
            }
        };

        let profile = remote.profile();
        self.session = Some(session);
        self.account = Some(Account {
            email: remote.email,
            profile: profile.clone(),
        });
        self.profile = profile;
        self.authenticated = true;
        // Discard anything a previous login left behind before fetching
        // this account's document.
        self.setup = None;
        self.setup_complete = false;
        self.notices.push(Notice::success("Welcome back"));

        if let Some(session) = &self.session {
            match self.gateway.get_setup_document(session).await {
                Ok(Some(setup)) => {
                    self.setup = Some(setup);
                    self.setup_complete = true;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "Could not fetch setup document");
                }
            }
        }

        self.screen = if self.setup_complete && self.setup.is_some() {
            Screen::Dashboard
        } else {
            Screen::Setup
        };
    }

    /// Commit a completed setup locally, then persist it best-effort.
    ///
    /// Persistence failure degrades to a warning; local state is never
    /// rolled back.
    pub async fn complete_setup(&mut self, data: SetupProfile) {
        self.setup = Some(data.clone());
        self.setup_complete = true;

        if let Some(session) = &self.session {
            match self.gateway.put_setup_document(session, &data).await {
                Ok(()) => self.notices.push(Notice::success("Data saved successfully")),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to save setup document");
                    self.notices
                        .push(Notice::warning("Setup completed but not saved"));
                }
            }
        }

        self.screen = Screen::Dashboard;
    }

    /// Clear the household and start setup over. The remote delete is
    /// best-effort and idempotent; local state clears regardless.
    pub async fn reset(&mut self) {
        if let Some(session) = &self.session {
            if let Err(err) = self.gateway.delete_setup_document(session).await {
                tracing::warn!(error = %err, "Failed to delete setup document");
            }
        }

        self.setup = None;
        self.setup_complete = false;
        self.screen = Screen::Setup;
    }

    /// Update profile fields locally, then sync best-effort.
    pub async fn update_profile(&mut self, data: UserProfile) {
        self.profile = data.clone();
        if let Some(account) = &mut self.account {
            account.profile = data.clone();
        }

        if let Some(session) = &self.session {
            match self.gateway.update_profile(session, &data).await {
                Ok(()) => self
                    .notices
                    .push(Notice::success("Profile saved successfully")),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to save profile");
                    self.notices.push(Notice::warning("Profile updated locally"));
                }
            }
        }
    }

    /// Re-fetch the account from the gateway, refreshing profile fields
    /// that may have been edited elsewhere. Best-effort; failure leaves
    /// local state untouched.
    pub async fn refresh_account(&mut self) {
        let Some(session) = &self.session else {
            return;
        };

        match self.gateway.fetch_account(session).await {
            Ok(remote) => {
                let profile = remote.profile();
                self.account = Some(Account {
                    email: remote.email,
                    profile: profile.clone(),
                });
                self.profile = profile;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not refresh account");
            }
        }
    }

    /// Drop the credential and return to login.
    ///
    /// Only `authenticated` and the session clear; the profile, account,
    /// and household stay in memory. A later login overwrites them before
    /// anything can be rendered from them.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.session = None;
        self.screen = Screen::Login;
    }
}
