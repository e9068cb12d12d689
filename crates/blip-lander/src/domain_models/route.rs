//! Routes
//!
//! Maps a location (path + query) onto one of the mutually exclusive page
//! categories the application knows about.

use blip_client::UserId;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use url::Url;

/// Base used to resolve relative input into an absolute location
const LOCATION_BASE: &str = "blip://app/";

/// A parsed navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Absolute path, always starting with '/'
    pub path: String,
    /// Decoded query parameters (`+` already turned into a space)
    pub query: BTreeMap<String, String>,
}

impl Location {
    /// Parse a path with an optional query string, e.g.
    /// `/patients/42/data?units=mmoll`
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let input = input.trim();
        let absolute = if input.starts_with('/') {
            input.to_string()
        } else {
            format!("/{}", input)
        };
        let url = Url::parse(LOCATION_BASE)?.join(&absolute)?;
        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self {
            path: url.path().to_string(),
            query,
        })
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }
}

/// Page categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    EmailVerification,
    Profile,
    PatientsList,
    PatientNew,
    PatientProfile(UserId),
    PatientShare(UserId),
    PatientData(UserId),
    RequestPasswordReset,
    ConfirmPasswordReset,
    Unmatched,
}

fn patient_page_regex() -> &'static Regex {
    static PATIENT_PAGE: OnceLock<Regex> = OnceLock::new();
    PATIENT_PAGE.get_or_init(|| {
        Regex::new(r"^/patients/([^/\s]+)/(profile|share|data)/?$").unwrap()
    })
}

fn patient_context_regex() -> &'static Regex {
    static PATIENT_CONTEXT: OnceLock<Regex> = OnceLock::new();
    PATIENT_CONTEXT.get_or_init(|| Regex::new(r"^/patients/[^/\s]+/").unwrap())
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        if let Some(caps) = patient_page_regex().captures(path) {
            let id = caps[1].to_string();
            return match &caps[2] {
                "profile" => Route::PatientProfile(id),
                "share" => Route::PatientShare(id),
                _ => Route::PatientData(id),
            };
        }

        match path.trim_end_matches('/') {
            "" | "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/email-verification" => Route::EmailVerification,
            "/profile" => Route::Profile,
            "/patients" => Route::PatientsList,
            "/patients/new" => Route::PatientNew,
            "/request-password-reset" => Route::RequestPasswordReset,
            "/confirm-password-reset" => Route::ConfirmPasswordReset,
            _ => Route::Unmatched,
        }
    }

    /// Id of the patient a route is about, if any
    pub fn patient_id(&self) -> Option<&str> {
        match self {
            Route::PatientProfile(id) | Route::PatientShare(id) | Route::PatientData(id) => {
                Some(id)
            }
            _ => None,
        }
    }

    /// Metric event emitted once per transition into this route
    pub fn metric_name(&self) -> &'static str {
        match self {
            Route::Login => "Viewed Login",
            Route::Signup => "Viewed Signup",
            Route::EmailVerification => "Viewed Email Verification",
            Route::Profile => "Viewed Account Edit",
            Route::PatientsList => "Viewed Care Team List",
            Route::PatientNew => "Viewed Profile Create",
            Route::PatientProfile(_) => "Viewed Profile",
            Route::PatientShare(_) => "Viewed Share",
            Route::PatientData(_) => "Viewed Data",
            Route::RequestPasswordReset => "Viewed Request Password Reset",
            Route::ConfirmPasswordReset => "Viewed Confirm Password Reset",
            Route::Unmatched => "Viewed Unmatched",
        }
    }

    /// Page title for the navbar
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Log in",
            Route::Signup => "Sign up",
            Route::EmailVerification => "Verify your email",
            Route::Profile => "Account",
            Route::PatientsList => "Care teams",
            Route::PatientNew => "Create patient profile",
            Route::PatientProfile(_) => "Profile",
            Route::PatientShare(_) => "Share",
            Route::PatientData(_) => "Data",
            Route::RequestPasswordReset => "Forgot password",
            Route::ConfirmPasswordReset => "Reset password",
            Route::Unmatched => "Not found",
        }
    }
}

/// Whether the navbar should show the viewed patient for this page path
///
/// Only pages below `/patients/{id}/` carry a patient context.
pub fn is_patient_visible_in_navbar(page: &str) -> bool {
    patient_context_regex().is_match(page)
}
