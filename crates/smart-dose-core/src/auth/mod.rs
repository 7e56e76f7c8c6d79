//! Mocked doctor sign-in and onboarding.
//!
//! There is no real authentication: any 10-digit phone number and any
//! 6-digit code are accepted. In demo mode the session starts (and returns
//! to, on logout) signed in as the default doctor.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::db::{DbResult, KeyValueStore, StorageSlot};
use crate::models::{DoctorProfile, DoctorProfileUpdate};

/// Auth errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,

    #[error("Please enter a valid 6-digit OTP")]
    InvalidOtp,
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Onboarding progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Splash,
    Login,
    Otp,
    ProfileSetup,
    Complete,
}

/// Persisted sign-in state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_onboarding_complete: bool,
    pub doctor: Option<DoctorProfile>,
    pub onboarding_step: OnboardingStep,
}

impl AuthState {
    /// Nobody signed in.
    pub fn signed_out() -> Self {
        Self {
            is_authenticated: false,
            is_onboarding_complete: false,
            doctor: None,
            onboarding_step: OnboardingStep::Splash,
        }
    }

    /// Fully onboarded as `doctor`.
    pub fn signed_in(doctor: DoctorProfile) -> Self {
        Self {
            is_authenticated: true,
            is_onboarding_complete: true,
            doctor: Some(doctor),
            onboarding_step: OnboardingStep::Complete,
        }
    }
}

/// Persistence for the auth state.
pub trait AuthStore {
    fn load_auth(&self) -> DbResult<Option<AuthState>>;
    fn save_auth(&self, state: &AuthState) -> DbResult<()>;
    fn clear_auth(&self) -> DbResult<()>;
}

impl<S: KeyValueStore> AuthStore for StorageSlot<S> {
    fn load_auth(&self) -> DbResult<Option<AuthState>> {
        self.load_json()
    }

    fn save_auth(&self, state: &AuthState) -> DbResult<()> {
        self.save_json(state)
    }

    fn clear_auth(&self) -> DbResult<()> {
        self.clear().map(|_| ())
    }
}

/// The doctor's sign-in session.
pub struct AuthSession<A> {
    store: A,
    state: AuthState,
    demo_mode: bool,
    default_doctor: DoctorProfile,
}

impl<A: AuthStore> AuthSession<A> {
    /// Restore the session. Demo mode ignores stored state.
    pub fn load(store: A, demo_mode: bool, default_doctor: DoctorProfile) -> Self {
        let state = if demo_mode {
            AuthState::signed_in(default_doctor.clone())
        } else {
            match store.load_auth() {
                Ok(Some(state)) => state,
                Ok(None) => AuthState::signed_out(),
                Err(e) => {
                    warn!(error = %e, "Could not load auth state");
                    AuthState::signed_out()
                }
            }
        };

        info!(
            demo_mode,
            authenticated = state.is_authenticated,
            step = ?state.onboarding_step,
            "Auth session loaded"
        );
        Self {
            store,
            state,
            demo_mode,
            default_doctor,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn doctor(&self) -> Option<&DoctorProfile> {
        self.state.doctor.as_ref()
    }

    /// Request an OTP for a phone number. Non-digits are ignored.
    pub fn login(&mut self, phone: &str) -> AuthResult<()> {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < 10 {
            return Err(AuthError::InvalidPhone);
        }
        self.update(|s| s.onboarding_step = OnboardingStep::Otp);
        Ok(())
    }

    /// Accept any 6-digit code.
    pub fn verify_otp(&mut self, otp: &str) -> AuthResult<()> {
        let otp = otp.trim();
        if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::InvalidOtp);
        }
        self.update(|s| {
            s.is_authenticated = true;
            s.onboarding_step = OnboardingStep::ProfileSetup;
        });
        Ok(())
    }

    /// Finish profile setup.
    pub fn complete_profile(&mut self, profile: DoctorProfile) {
        self.update(|s| {
            s.doctor = Some(profile);
            s.onboarding_step = OnboardingStep::Complete;
            s.is_onboarding_complete = true;
        });
    }

    /// Mark onboarding done without changing the profile.
    pub fn complete_onboarding(&mut self) {
        self.update(|s| {
            s.is_onboarding_complete = true;
            s.onboarding_step = OnboardingStep::Complete;
        });
    }

    /// Edit the signed-in doctor's profile. Returns false when nobody is
    /// signed in.
    pub fn update_profile(&mut self, update: DoctorProfileUpdate) -> bool {
        if self.state.doctor.is_none() {
            return false;
        }
        self.update(|s| {
            if let Some(doctor) = s.doctor.as_mut() {
                doctor.apply(update);
            }
        });
        true
    }

    /// Skip onboarding as the default doctor.
    pub fn skip_to_app(&mut self) {
        self.state = AuthState::signed_in(self.default_doctor.clone());
        self.persist();
    }

    /// Sign out and forget the stored state. In demo mode this resets to
    /// the default doctor.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear_auth() {
            warn!(error = %e, "Could not clear auth state");
        }
        self.state = if self.demo_mode {
            AuthState::signed_in(self.default_doctor.clone())
        } else {
            AuthState::signed_out()
        };
        info!(demo_mode = self.demo_mode, "Logged out");
    }

    fn update(&mut self, change: impl FnOnce(&mut AuthState)) {
        change(&mut self.state);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_auth(&self.state) {
            warn!(error = %e, "Could not persist auth state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::demo;

    const KEY: &str = "doz3_doctor_auth";

    fn session(store: &MemoryStore, demo_mode: bool) -> AuthSession<StorageSlot<&MemoryStore>> {
        AuthSession::load(StorageSlot::new(store, KEY), demo_mode, demo::default_doctor())
    }

    #[test]
    fn test_demo_mode_starts_signed_in() {
        let store = MemoryStore::new();
        let auth = session(&store, true);

        assert!(auth.state().is_authenticated);
        assert_eq!(auth.state().onboarding_step, OnboardingStep::Complete);
        assert_eq!(auth.doctor().unwrap().id, "DOC-001");
    }

    #[test]
    fn test_onboarding_flow() {
        let store = MemoryStore::new();
        let mut auth = session(&store, false);
        assert_eq!(auth.state(), &AuthState::signed_out());

        assert_eq!(auth.login("98765"), Err(AuthError::InvalidPhone));
        auth.login("+91 98765 43210").unwrap();
        assert_eq!(auth.state().onboarding_step, OnboardingStep::Otp);

        assert_eq!(auth.verify_otp("12345"), Err(AuthError::InvalidOtp));
        assert_eq!(auth.verify_otp("12a456"), Err(AuthError::InvalidOtp));
        auth.verify_otp("123456").unwrap();
        assert!(auth.state().is_authenticated);
        assert_eq!(auth.state().onboarding_step, OnboardingStep::ProfileSetup);

        auth.complete_profile(demo::default_doctor());
        assert!(auth.state().is_onboarding_complete);

        // state survives a reload outside demo mode
        let reloaded = session(&store, false);
        assert_eq!(reloaded.state(), auth.state());
    }

    #[test]
    fn test_update_profile() {
        let store = MemoryStore::new();
        let mut auth = session(&store, false);
        assert!(!auth.update_profile(DoctorProfileUpdate::default()));

        auth.skip_to_app();
        assert!(auth.update_profile(DoctorProfileUpdate {
            clinic_name: Some("Koramangala Clinic".into()),
            ..Default::default()
        }));
        assert_eq!(auth.doctor().unwrap().clinic_name, "Koramangala Clinic");
    }

    #[test]
    fn test_logout() {
        let store = MemoryStore::new();
        let mut auth = session(&store, false);
        auth.skip_to_app();
        assert!(!store.is_empty());

        auth.logout();
        assert_eq!(auth.state(), &AuthState::signed_out());
        assert!(store.is_empty());

        let mut demo_auth = session(&store, true);
        demo_auth.logout();
        assert!(demo_auth.state().is_authenticated);
    }

    #[test]
    fn test_step_serializes_kebab_case() {
        let json = serde_json::to_value(AuthState::signed_out()).unwrap();
        assert_eq!(json["onboardingStep"], "splash");
        assert_eq!(
            serde_json::to_string(&OnboardingStep::ProfileSetup).unwrap(),
            "\"profile-setup\""
        );
    }
}
