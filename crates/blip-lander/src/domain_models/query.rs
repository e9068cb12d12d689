//! Query preferences
//!
//! Display and signup preferences derived once from the query string of the
//! initial location. Invalid values are logged and ignored; they never reach
//! the user as a banner.

use chrono_tz::Tz;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryParamError {
    #[error("Invalid timezone name in query parameter: {0}. (Try capitalizing properly.)")]
    InvalidTimezone(String),

    #[error("Invalid email address in query parameter {param}: {value}")]
    InvalidEmail { param: &'static str, value: String },
}

/// Blood glucose display unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BgUnits {
    #[default]
    MgDl,
    MmolL,
}

impl BgUnits {
    pub fn label(&self) -> &'static str {
        match self {
            BgUnits::MgDl => "mg/dL",
            BgUnits::MmolL => "mmol/L",
        }
    }

    /// Convert a mg/dL reading into this unit
    pub fn convert_mg_dl(&self, value: f64) -> f64 {
        match self {
            BgUnits::MgDl => value,
            BgUnits::MmolL => (value / 18.01559 * 10.0).round() / 10.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimePrefs {
    pub timezone_aware: bool,
    pub timezone_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BgPrefs {
    pub bg_units: BgUnits,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPreferences {
    pub time_prefs: TimePrefs,
    pub bg_prefs: BgPrefs,
    pub signup_email: Option<String>,
    pub invite_email: Option<String>,
    /// Opaque invitation key, empty when absent
    pub invite_key: String,
    /// Opaque key from a signup confirmation link
    pub signup_key: Option<String>,
}

impl QueryPreferences {
    pub fn from_query(query: &BTreeMap<String, String>) -> Self {
        let mut prefs = Self::default();

        if let Some(raw) = non_empty(query, "timezone") {
            match parse_timezone(raw) {
                Ok(name) => {
                    log::info!(
                        "Viewing data in timezone-aware mode with {} as the selected timezone.",
                        name
                    );
                    prefs.time_prefs = TimePrefs {
                        timezone_aware: true,
                        timezone_name: Some(name),
                    };
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(raw) = non_empty(query, "units") {
            prefs.bg_prefs.bg_units = parse_units(raw);
        }

        if let Some(raw) = non_empty(query, "signupEmail") {
            prefs.signup_email = parse_signup_email(raw)
                .map_err(|e| log::warn!("{}", e))
                .ok();
        }

        if let Some(raw) = non_empty(query, "inviteEmail") {
            prefs.invite_email = parse_invite_email(raw)
                .map_err(|e| log::warn!("{}", e))
                .ok();
        }

        if let Some(raw) = non_empty(query, "inviteKey") {
            prefs.invite_key = raw.to_string();
        }

        prefs.signup_key = non_empty(query, "signupKey").map(str::to_string);

        prefs
    }
}

fn non_empty<'a>(query: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    query.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// `America-New_York` → `America/New_York`, validated against the IANA table
pub fn parse_timezone(raw: &str) -> Result<String, QueryParamError> {
    let candidate = raw.replacen('-', "/", 1);
    candidate
        .parse::<Tz>()
        .map(|tz| tz.name().to_string())
        .map_err(|_| QueryParamError::InvalidTimezone(candidate))
}

/// `mmoll` (any case) selects mmol/L, anything else keeps mg/dL
pub fn parse_units(raw: &str) -> BgUnits {
    if raw.eq_ignore_ascii_case("mmoll") {
        BgUnits::MmolL
    } else {
        BgUnits::MgDl
    }
}

pub fn parse_signup_email(raw: &str) -> Result<String, QueryParamError> {
    if is_valid_email(raw) {
        Ok(raw.to_string())
    } else {
        Err(QueryParamError::InvalidEmail {
            param: "signupEmail",
            value: raw.to_string(),
        })
    }
}

/// Query string decoding turns `+` into a space, which breaks addresses with
/// mutators like `a+skip@x.com`. The first whitespace run is turned back
/// into `+` before validation.
pub fn parse_invite_email(raw: &str) -> Result<String, QueryParamError> {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());

    let email = whitespace.replace(raw, "+").into_owned();
    if is_valid_email(&email) {
        Ok(email)
    } else {
        Err(QueryParamError::InvalidEmail {
            param: "inviteEmail",
            value: email,
        })
    }
}

pub fn is_valid_email(candidate: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(
                r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
            )
            .unwrap()
        })
        .is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_query() {
        let prefs = QueryPreferences::from_query(&BTreeMap::new());
        assert!(!prefs.time_prefs.timezone_aware);
        assert_eq!(prefs.time_prefs.timezone_name, None);
        assert_eq!(prefs.bg_prefs.bg_units, BgUnits::MgDl);
        assert_eq!(prefs.invite_key, "");
        assert_eq!(prefs.signup_email, None);
    }

    #[test]
    fn test_timezone_hyphen_is_rewritten() {
        let prefs = QueryPreferences::from_query(&query(&[("timezone", "America-New_York")]));
        assert!(prefs.time_prefs.timezone_aware);
        assert_eq!(
            prefs.time_prefs.timezone_name.as_deref(),
            Some("America/New_York")
        );
    }

    #[test]
    fn test_invalid_timezone_is_ignored() {
        let prefs = QueryPreferences::from_query(&query(&[("timezone", "Not-A-Zone")]));
        assert!(!prefs.time_prefs.timezone_aware);
        assert_eq!(prefs.time_prefs.timezone_name, None);
        assert_eq!(
            parse_timezone("Not-A-Zone"),
            Err(QueryParamError::InvalidTimezone("Not/A-Zone".to_string()))
        );
    }

    #[test]
    fn test_units() {
        assert_eq!(parse_units("mmoll"), BgUnits::MmolL);
        assert_eq!(parse_units("MMOLL"), BgUnits::MmolL);
        assert_eq!(parse_units("mgdl"), BgUnits::MgDl);
        assert_eq!(parse_units("whatever"), BgUnits::MgDl);
    }

    #[test]
    fn test_mmol_conversion() {
        assert_eq!(BgUnits::MgDl.convert_mg_dl(180.0), 180.0);
        assert_eq!(BgUnits::MmolL.convert_mg_dl(180.0), 10.0);
    }

    #[test]
    fn test_invite_email_without_space_passes_through() {
        assert_eq!(
            parse_invite_email("a+skip@x.com").unwrap(),
            "a+skip@x.com".to_string()
        );
    }

    #[test]
    fn test_invite_email_space_becomes_plus() {
        let prefs = QueryPreferences::from_query(&query(&[("inviteEmail", "a skip@x.com")]));
        assert_eq!(prefs.invite_email.as_deref(), Some("a+skip@x.com"));
    }

    #[test]
    fn test_invite_email_only_first_whitespace_run_is_rewritten() {
        assert!(parse_invite_email("a  b c@x.com").is_err());
        assert_eq!(parse_invite_email("a  b@x.com").unwrap(), "a+b@x.com");
    }

    #[test]
    fn test_invalid_emails_are_dropped() {
        let prefs = QueryPreferences::from_query(&query(&[
            ("signupEmail", "not-an-email"),
            ("inviteEmail", "nope@"),
        ]));
        assert_eq!(prefs.signup_email, None);
        assert_eq!(prefs.invite_email, None);
    }

    #[test]
    fn test_signup_email_and_keys() {
        let prefs = QueryPreferences::from_query(&query(&[
            ("signupEmail", "jane@example.com"),
            ("inviteKey", "abc"),
            ("signupKey", "xyz"),
        ]));
        assert_eq!(prefs.signup_email.as_deref(), Some("jane@example.com"));
        assert_eq!(prefs.invite_key, "abc");
        assert_eq!(prefs.signup_key.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+tag@sub.example.org"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@x.com"));
        assert!(!is_valid_email(""));
    }
}
