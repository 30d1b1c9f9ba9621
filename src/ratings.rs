//! Closed string-backed classifications returned by the verification API.
//!
//! Conversions from wire strings are total: unknown, empty, or absent values
//! coerce to each type's fallback member instead of failing, so responses
//! that gain new classifications over time never break deserialization.

use std::fmt;

/// How well a submitted attribute matched authoritative data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRank {
    /// Exact match.
    Match,
    /// No match found.
    NoMatch,
    /// Partial match.
    PartialMatch,
    /// The attribute contradicted authoritative data.
    Mismatch,
    /// Not enough data to make a determination. Fallback member.
    InsufficientData,
}

impl MatchRank {
    /// Converts a raw wire value. Case-insensitive; unknown or absent input
    /// yields [`MatchRank::InsufficientData`].
    pub fn from_wire(value: Option<&str>) -> Self {
        let value = match value {
            Some(v) => v,
            None => return MatchRank::InsufficientData,
        };
        if value.eq_ignore_ascii_case("match") {
            MatchRank::Match
        } else if value.eq_ignore_ascii_case("partial_match") {
            MatchRank::PartialMatch
        } else if value.eq_ignore_ascii_case("no_match") {
            MatchRank::NoMatch
        } else if value.eq_ignore_ascii_case("mismatch") {
            MatchRank::Mismatch
        } else {
            MatchRank::InsufficientData
        }
    }

    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRank::Match => "match",
            MatchRank::NoMatch => "no_match",
            MatchRank::PartialMatch => "partial_match",
            MatchRank::Mismatch => "mismatch",
            MatchRank::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for MatchRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk classification of a submitted address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRisk {
    /// High-risk address (mail drop, prison, etc.).
    High,
    /// The address was not found.
    NoMatch,
    /// Low-risk address.
    Low,
    /// Not enough data to make a determination. Fallback member.
    InsufficientData,
}

impl AddressRisk {
    /// Converts a raw wire value. Case-insensitive; unknown or absent input
    /// yields [`AddressRisk::InsufficientData`].
    pub fn from_wire(value: Option<&str>) -> Self {
        let value = match value {
            Some(v) => v,
            None => return AddressRisk::InsufficientData,
        };
        if value.eq_ignore_ascii_case("high") {
            AddressRisk::High
        } else if value.eq_ignore_ascii_case("no_match") {
            AddressRisk::NoMatch
        } else if value.eq_ignore_ascii_case("low") {
            AddressRisk::Low
        } else {
            AddressRisk::InsufficientData
        }
    }

    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressRisk::High => "high",
            AddressRisk::NoMatch => "no_match",
            AddressRisk::Low => "low",
            AddressRisk::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for AddressRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal structure of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorporationType {
    /// C or S corporation.
    Corporation,
    /// Limited liability company.
    Llc,
    /// Partnership.
    Partnership,
    /// Sole proprietorship.
    SoleProprietorship,
    /// Any other legal structure. Fallback member.
    Other,
}

impl CorporationType {
    /// Converts a raw wire value. Case-insensitive; unknown or absent input
    /// yields [`CorporationType::Other`].
    pub fn from_wire(value: Option<&str>) -> Self {
        let value = match value {
            Some(v) => v,
            None => return CorporationType::Other,
        };
        if value.eq_ignore_ascii_case("corporation") {
            CorporationType::Corporation
        } else if value.eq_ignore_ascii_case("llc") {
            CorporationType::Llc
        } else if value.eq_ignore_ascii_case("partnership") {
            CorporationType::Partnership
        } else if value.eq_ignore_ascii_case("sole_proprietorship") {
            CorporationType::SoleProprietorship
        } else {
            CorporationType::Other
        }
    }

    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CorporationType::Corporation => "corporation",
            CorporationType::Llc => "llc",
            CorporationType::Partnership => "partnership",
            CorporationType::SoleProprietorship => "sole_proprietorship",
            CorporationType::Other => "other",
        }
    }
}

impl fmt::Display for CorporationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall result of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityStatus {
    /// The submitted information checked out.
    Valid,
    /// The submitted information did not check out. Fallback member.
    Invalid,
}

impl ValidityStatus {
    /// Converts a raw wire value. Case-insensitive; unknown or absent input
    /// yields [`ValidityStatus::Invalid`].
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("valid") => ValidityStatus::Valid,
            _ => ValidityStatus::Invalid,
        }
    }

    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidityStatus::Valid => "valid",
            ValidityStatus::Invalid => "invalid",
        }
    }
}

impl fmt::Display for ValidityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
