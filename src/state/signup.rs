//! Three-step signup wizard: parent account, first child, review.
//!
//! DESIGN
//! ======
//! Step navigation and validation are plain state transitions so they can be
//! tested without a browser. The terminal action runs against a
//! [`SignupBackend`]; the page supplies one backed by the live API and the
//! session, tests supply a recording mock.
//!
//! The remote chain is strictly sequential and aborts on the first failure.
//! Nothing is rolled back: an account created before a failed login stays.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::i18n::Locale;
use crate::net::error::ApiError;
use crate::net::types::{Child, CreateChildPayload, LoginPayload, LoginResponse, RegisterPayload, RegisterResponse};

/// Gender choices offered for the child.
pub const GENDERS: [&str; 2] = ["Boy", "Girl"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupStep {
    #[default]
    ParentInfo,
    ChildInfo,
    Review,
}

impl SignupStep {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Self::ParentInfo => 0,
            Self::ChildInfo => 1,
            Self::Review => 2,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::ParentInfo => Some(Self::ChildInfo),
            Self::ChildInfo => Some(Self::Review),
            Self::Review => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::ParentInfo => None,
            Self::ChildInfo => Some(Self::ParentInfo),
            Self::Review => Some(Self::ChildInfo),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ParentInfo => "Parent information",
            Self::ChildInfo => "Child information",
            Self::Review => "Review & confirm",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub region_id: Option<i64>,
    pub password: String,
    pub confirm_password: String,
}

impl ParentData {
    pub fn is_valid(&self) -> bool {
        filled(&self.full_name)
            && filled(&self.email)
            && filled(&self.phone)
            && self.region_id.is_some()
            && !self.password.is_empty()
            && self.password == self.confirm_password
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChildData {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
}

impl ChildData {
    pub fn is_valid(&self) -> bool {
        filled(&self.first_name) && filled(&self.last_name) && filled(&self.date_of_birth) && filled(&self.gender)
    }

    /// "first last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_owned()
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Payloads for the terminal action, built from the wizard fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub register: RegisterPayload,
    pub login: LoginPayload,
    pub child: CreateChildPayload,
    pub locale: Locale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupWizard {
    pub step: SignupStep,
    pub parent: ParentData,
    pub child: ChildData,
    pub agreed: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl SignupWizard {
    /// Whether the current step's fields allow moving on.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            SignupStep::ParentInfo => self.parent.is_valid(),
            SignupStep::ChildInfo => self.child.is_valid(),
            SignupStep::Review => self.agreed,
        }
    }

    /// Advance one step. Refused when the current step is invalid or already on review.
    pub fn next(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Field values are kept.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                self.error = None;
                true
            }
            None => false,
        }
    }

    /// Claim the submit slot. Returns the request, or `None` when not on a
    /// valid review step or a submit is already in flight.
    pub fn begin_submit(&mut self, locale: Locale) -> Option<SignupRequest> {
        if self.loading || self.step != SignupStep::Review || !self.can_proceed() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.request(locale))
    }

    pub fn finish_submit(&mut self, result: &Result<Child, ApiError>) {
        self.loading = false;
        self.error = result.as_ref().err().map(ToString::to_string);
    }

    pub fn request(&self, locale: Locale) -> SignupRequest {
        let email = self.parent.email.trim().to_owned();
        let phone = self.parent.phone.trim();
        let gender = self.child.gender.trim();
        SignupRequest {
            register: RegisterPayload {
                name: self.parent.full_name.trim().to_owned(),
                email: email.clone(),
                password: self.parent.password.clone(),
                phone_number: (!phone.is_empty()).then(|| phone.to_owned()),
                region_id: self.parent.region_id,
            },
            login: LoginPayload { email, password: self.parent.password.clone() },
            child: CreateChildPayload {
                name: self.child.full_name(),
                birthdate: self.child.date_of_birth.trim().to_owned(),
                gender: (!gender.is_empty()).then(|| gender.to_owned()),
            },
            locale,
        }
    }
}

/// Remote steps of the signup chain.
#[async_trait::async_trait(?Send)]
pub trait SignupBackend {
    async fn register(&self, payload: &RegisterPayload) -> Result<RegisterResponse, ApiError>;
    async fn login(&self, payload: &LoginPayload) -> Result<LoginResponse, ApiError>;
    /// Persist the token so later calls carry it.
    fn persist_token(&self, login: &LoginResponse);
    async fn set_preferred_language(&self, locale: Locale) -> Result<(), ApiError>;
    async fn create_child(&self, payload: &CreateChildPayload) -> Result<Child, ApiError>;
}

/// Run register, login, persist token, best-effort language, create child.
///
/// # Errors
///
/// Returns the first failing step's error; later steps are not attempted.
/// A language update failure is logged and ignored.
pub async fn submit_signup(backend: &dyn SignupBackend, request: &SignupRequest) -> Result<Child, ApiError> {
    let account = backend.register(&request.register).await?;
    log::info!("registered account {}", account.id);
    let token = backend.login(&request.login).await?;
    backend.persist_token(&token);
    if let Err(e) = backend.set_preferred_language(request.locale).await {
        log::warn!("preferred language not saved: {e}");
    }
    backend.create_child(&request.child).await
}
