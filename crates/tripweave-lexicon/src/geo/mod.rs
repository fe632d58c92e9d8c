// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod data;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location is required")]
    EmptyInput,
    /// Carries the input exactly as the user typed it.
    #[error("Unable to find airport code for \"{0}\". Please try a major city name.")]
    UnknownLocation(String),
}

/// Three uppercase ASCII letters. Nothing checks that the airport exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IataCode(String);

impl IataCode {
    /// Accepts exactly three ASCII letters in any case.
    pub fn parse(s: &str) -> Option<Self> {
        static CODE_RE: OnceLock<Regex> = OnceLock::new();
        let code_re = CODE_RE.get_or_init(|| Regex::new(r"^[A-Za-z]{3}$").unwrap());
        if code_re.is_match(s) {
            Some(Self(s.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which table answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// The input was already a code.
    Code,
    City,
    /// Country name mapped to its primary hub; the user may have meant another airport.
    Country,
}

/// Outcome of validating a location field, shaped for display next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub valid: bool,
    pub code: Option<IataCode>,
    pub error_message: Option<String>,
}

impl From<Result<IataCode, LocationError>> for ResolutionResult {
    fn from(result: Result<IataCode, LocationError>) -> Self {
        match result {
            Ok(code) => Self {
                valid: true,
                code: Some(code),
                error_message: None,
            },
            Err(e) => Self {
                valid: false,
                code: None,
                error_message: Some(e.to_string()),
            },
        }
    }
}

/// Lowercase, trim and collapse runs of whitespace to a single space.
pub fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Two-tier table lookup on an already-normalized key: cities first, then countries.
pub fn lookup(key: &str) -> Option<(IataCode, MatchTier)> {
    if let Some(code) = data::city_airport(key) {
        return Some((IataCode(code.to_string()), MatchTier::City));
    }
    data::country_hub(key).map(|code| (IataCode(code.to_string()), MatchTier::Country))
}

/// Resolves free text to an airport code, reporting which tier matched.
pub fn resolve_with_tier(input: &str) -> Result<(IataCode, MatchTier), LocationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LocationError::EmptyInput);
    }

    // Explicit codes win over the table, so "nyc" stays NYC rather than JFK.
    if let Some(code) = IataCode::parse(trimmed) {
        return Ok((code, MatchTier::Code));
    }

    let key = normalize_key(trimmed);
    match lookup(&key) {
        Some((code, MatchTier::Country)) => {
            log::debug!(
                "Resolved country to its primary hub — input={:?} code={}",
                input,
                code
            );
            Ok((code, MatchTier::Country))
        }
        Some(found) => Ok(found),
        None => {
            log::debug!("No airport code for location — input={:?} key={:?}", input, key);
            Err(LocationError::UnknownLocation(input.to_string()))
        }
    }
}

pub fn resolve_code(input: &str) -> Result<IataCode, LocationError> {
    resolve_with_tier(input).map(|(code, _)| code)
}

pub fn resolve(input: &str) -> ResolutionResult {
    resolve_code(input).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_city_any_case() {
        for input in ["  Mumbai  ", "MUMBAI", "mumbai"] {
            let r = resolve(input);
            assert!(r.valid, "{input:?} should resolve");
            assert_eq!(r.code.unwrap().as_str(), "BOM");
            assert_eq!(r.error_message, None);
        }
    }

    #[test]
    fn test_resolve_empty() {
        for input in ["", "   ", "\t\n"] {
            let r = resolve(input);
            assert!(!r.valid);
            assert_eq!(r.code, None);
            assert_eq!(r.error_message.as_deref(), Some("Location is required"));
        }
    }

    #[test]
    fn test_resolve_code_passthrough() {
        assert_eq!(resolve_code("lhr").unwrap().as_str(), "LHR");
        assert_eq!(resolve_code(" jFk ").unwrap().as_str(), "JFK");
        // Not in any table, still trusted.
        assert_eq!(resolve_code("QQQ").unwrap().as_str(), "QQQ");
    }

    #[test]
    fn test_three_letter_alias_is_treated_as_code() {
        let (code, tier) = resolve_with_tier("nyc").unwrap();
        assert_eq!(code.as_str(), "NYC");
        assert_eq!(tier, MatchTier::Code);
        // The table itself still knows the alias.
        assert_eq!(lookup("nyc").unwrap().0.as_str(), "JFK");
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        assert_eq!(resolve_code("New    York\tCity").unwrap().as_str(), "JFK");
        assert_eq!(resolve_code("abu  dhabi").unwrap().as_str(), "AUH");
    }

    #[test]
    fn test_country_tier() {
        let (code, tier) = resolve_with_tier("United States").unwrap();
        assert_eq!(code.as_str(), "JFK");
        assert_eq!(tier, MatchTier::Country);

        let (code, tier) = resolve_with_tier("Japan").unwrap();
        assert_eq!(code.as_str(), "NRT");
        assert_eq!(tier, MatchTier::Country);
    }

    #[test]
    fn test_unknown_keeps_original_input() {
        let err = resolve_code("  Atlantis  ").unwrap_err();
        assert_eq!(err, LocationError::UnknownLocation("  Atlantis  ".to_string()));
        assert_eq!(
            err.to_string(),
            "Unable to find airport code for \"  Atlantis  \". Please try a major city name."
        );
    }

    #[test]
    fn test_iata_code_parse_rejects_non_letters() {
        assert!(IataCode::parse("AB1").is_none());
        assert!(IataCode::parse("ABCD").is_none());
        assert!(IataCode::parse("AB").is_none());
        assert!(IataCode::parse("ÄBC").is_none());
    }
}
