use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// A single doctor record as served by the roster endpoint.
///
/// Records are read-only for the lifetime of a page view. Fields the
/// directory does not display (ids, languages, introductions) are ignored on
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specialities: Vec<Speciality>,
    #[serde(default)]
    pub clinic: Option<Clinic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speciality {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub name: String,
    #[serde(default)]
    pub address: Option<ClinicAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicAddress {
    #[serde(default)]
    pub locality: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photo: String::new(),
            experience: String::new(),
            fees: String::new(),
            mode: None,
            specialities: Vec::new(),
            clinic: None,
        }
    }

    pub fn speciality_names(&self) -> impl Iterator<Item = &str> {
        self.specialities.iter().map(|s| s.name.as_str())
    }

    pub fn has_speciality(&self, name: &str) -> bool {
        self.speciality_names().any(|s| s == name)
    }

    pub fn fee_amount(&self) -> Option<u64> {
        leading_number(&self.fees)
    }

    pub fn experience_years(&self) -> Option<u64> {
        leading_number(&self.experience)
    }

    pub fn locality(&self) -> Option<&str> {
        self.clinic
            .as_ref()
            .and_then(|clinic| clinic.address.as_ref())
            .and_then(|address| address.locality.as_deref())
    }
}

/// Reads the first run of ASCII digits, skipping any prefix such as a
/// currency symbol ("₹ 500" is 500, "13 Years of experience" is 13).
/// Thousands separators inside the run are dropped ("₹ 1,200" is 1200).
pub fn leading_number(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let mut digits = String::new();
    let mut chars = text[start..].chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => digits.push(c),
            ',' if chars.peek().is_some_and(char::is_ascii_digit) => {}
            _ => break,
        }
    }
    // Saturate instead of failing on absurdly long digit runs.
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultationMode {
    Video,
    InClinic,
}

impl ConsultationMode {
    pub const ALL: [ConsultationMode; 2] = [ConsultationMode::Video, ConsultationMode::InClinic];

    pub fn label(self) -> &'static str {
        match self {
            ConsultationMode::Video => "Video Consultation",
            ConsultationMode::InClinic => "In-clinic Consultation",
        }
    }

    /// Parses a URL value. `"All"` and the empty string select no mode.
    pub fn from_param(value: &str) -> Result<Option<Self>, DomainError> {
        match value.trim() {
            "" | "All" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConsultationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsultationMode::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| DomainError::UnknownMode(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Fees,
    Experience,
}

impl SortKey {
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Fees => "Price: Low-High",
            SortKey::Experience => "Experience: Most first",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fees" => Ok(SortKey::Fees),
            "experience" => Ok(SortKey::Experience),
            other => Err(DomainError::UnknownSortKey(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
