//! Location hierarchy codec
//!
//! A location code is a colon-delimited string with the most specific
//! segment first: `city:province:country`. Codes may omit the more specific
//! segments, so `province:country` and `country` are accepted too.
//!
//! [`LocationCode::parse`] is total: malformed input degrades to empty
//! fields instead of failing, and an empty field is the wildcard used by
//! pattern matching. [`LocationCode::parse_strict`] rejects the inputs that
//! `parse` would silently degrade, and is what the wire format uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SEPARATOR: char = ':';
const MAX_SEGMENTS: usize = 3;

/// A location, or a location pattern when some fields are empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationCode {
    city: String,
    province: String,
    country: String,
}

/// Location codes rejected by strict parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location code is empty")]
    Empty,

    #[error("Location code '{code}' has {segments} segments, expected at most 3")]
    TooManySegments { code: String, segments: usize },

    #[error("Location code '{0}' has no country")]
    MissingCountry(String),
}

impl LocationCode {
    /// Build a code from its fields; pass empty strings for wildcards
    pub fn new(
        city: impl Into<String>,
        province: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            province: province.into(),
            country: country.into(),
        }
    }

    /// A country-wide code
    pub fn country(country: impl Into<String>) -> Self {
        Self::new("", "", country)
    }

    /// A province-wide code
    pub fn province(province: impl Into<String>, country: impl Into<String>) -> Self {
        Self::new("", province, country)
    }

    /// Parse a code without validation.
    ///
    /// Three segments fill city, province and country; two fill province and
    /// country; one fills country. Any other segment count yields a code with
    /// every field empty.
    pub fn parse(code: &str) -> Self {
        let segments: Vec<&str> = code.split(SEPARATOR).collect();
        match segments.as_slice() {
            [city, province, country] => Self::new(*city, *province, *country),
            [province, country] => Self::province(*province, *country),
            [country] => Self::country(*country),
            _ => Self::default(),
        }
    }

    /// Parse a code, rejecting empty input, more than three segments and a
    /// missing country.
    pub fn parse_strict(code: &str) -> Result<Self, LocationError> {
        if code.trim().is_empty() {
            return Err(LocationError::Empty);
        }

        let segments = code.split(SEPARATOR).count();
        if segments > MAX_SEGMENTS {
            return Err(LocationError::TooManySegments {
                code: code.to_string(),
                segments,
            });
        }

        let parsed = Self::parse(code);
        if parsed.is_degenerate() {
            return Err(LocationError::MissingCountry(code.to_string()));
        }
        Ok(parsed)
    }

    pub fn city_name(&self) -> &str {
        &self.city
    }

    pub fn province_name(&self) -> &str {
        &self.province
    }

    pub fn country_name(&self) -> &str {
        &self.country
    }

    /// A code without a country matches nothing meaningful
    pub fn is_degenerate(&self) -> bool {
        self.country.is_empty()
    }
}

impl fmt::Display for LocationCode {
    /// Canonical form: as many segments as the most specific field needs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.city.is_empty() {
            write!(f, "{}:{}:{}", self.city, self.province, self.country)
        } else if !self.province.is_empty() {
            write!(f, "{}:{}", self.province, self.country)
        } else {
            f.write_str(&self.country)
        }
    }
}

impl FromStr for LocationCode {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl TryFrom<String> for LocationCode {
    type Error = LocationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_strict(&value)
    }
}

impl From<LocationCode> for String {
    fn from(code: LocationCode) -> Self {
        code.to_string()
    }
}
