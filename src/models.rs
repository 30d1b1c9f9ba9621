use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ratings::{AddressRisk, CorporationType, MatchRank, ValidityStatus};

// ============ Value Objects ============

/// A postal address. Immutable value object embedded in persons, companies
/// and candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Primary street line.
    pub street1: String,
    /// Secondary street line (apartment, suite).
    pub street2: Option<String>,
    /// City.
    pub city: String,
    /// State, province or other subdivision.
    pub subdivision: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO alpha-2 country code.
    pub country_code: String,
}

impl Address {
    /// Builds an address from its parts.
    pub fn new(
        street1: impl Into<String>,
        street2: Option<&str>,
        city: impl Into<String>,
        subdivision: impl Into<String>,
        postal_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            street1: street1.into(),
            street2: street2.map(String::from),
            city: city.into(),
            subdivision: subdivision.into(),
            postal_code: postal_code.into(),
            country_code: country_code.into(),
        }
    }

    pub fn street1(&self) -> &str {
        &self.street1
    }

    pub fn street2(&self) -> Option<&str> {
        self.street2.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn subdivision(&self) -> &str {
        &self.subdivision
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

/// Breakdown of how a verification status was determined.
///
/// Every field arrives as a raw string and is mapped lazily through the
/// lenient conversions in [`crate::ratings`]; absent or unrecognized values
/// yield each type's fallback member. The `ofac` field is present on every
/// valid response; all others may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Details {
    /// Raw address match result.
    address: Option<String>,
    /// Raw address risk classification.
    address_risk: Option<String>,
    /// Raw identification document match result.
    identification: Option<String>,
    /// Raw date-of-birth match result.
    date_of_birth: Option<String>,
    /// Raw OFAC watchlist match result.
    ofac: Option<String>,
    /// Raw entity name match result.
    entity_name: Option<String>,
    /// Raw tax ID match result.
    tax_id: Option<String>,
}

impl Details {
    /// Match quality of the submitted address.
    pub fn address_match(&self) -> MatchRank {
        MatchRank::from_wire(self.address.as_deref())
    }

    /// Risk classification of the submitted address.
    pub fn address_risk(&self) -> AddressRisk {
        AddressRisk::from_wire(self.address_risk.as_deref())
    }

    /// Match quality of the identification document.
    pub fn identification_match(&self) -> MatchRank {
        MatchRank::from_wire(self.identification.as_deref())
    }

    /// Match quality of the date of birth.
    pub fn date_of_birth_match(&self) -> MatchRank {
        MatchRank::from_wire(self.date_of_birth.as_deref())
    }

    /// Match against the OFAC sanctions watchlist. Present on every valid
    /// verification response.
    pub fn ofac_match(&self) -> MatchRank {
        MatchRank::from_wire(self.ofac.as_deref())
    }

    /// Match quality of the entity name.
    pub fn entity_name_match(&self) -> MatchRank {
        MatchRank::from_wire(self.entity_name.as_deref())
    }

    /// Match quality of the tax ID.
    pub fn tax_id_match(&self) -> MatchRank {
        MatchRank::from_wire(self.tax_id.as_deref())
    }
}

/// Reconstructs a calendar date from discrete wire parts. `None` unless all
/// three parts are present and form a real date; a partial date is never
/// constructed.
fn date_from_parts(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year?, month?, day?)
}

/// Splits a comma-delimited wire value into its parts. Empty input yields an
/// empty vec, not a vec with one empty string.
fn split_delimited(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

// ============ Entities ============

/// A person registered for identity verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier.
    id: String,
    /// Raw validity status.
    status: Option<String>,
    /// Verification breakdown.
    details: Option<Details>,
    /// First name.
    name_first: Option<String>,
    /// Middle name.
    name_middle: Option<String>,
    /// Last name.
    name_last: Option<String>,
    /// Identification document type (e.g. "ssn", "passport").
    document_type: Option<String>,
    /// Identification document value.
    document_value: Option<String>,
    /// Day-of-month part of the date of birth.
    birth_day: Option<u32>,
    /// Month part of the date of birth, 1-indexed (January = 1).
    birth_month: Option<u32>,
    /// Year part of the date of birth.
    birth_year: Option<i32>,
    address_street1: Option<String>,
    address_street2: Option<String>,
    address_city: Option<String>,
    address_subdivision: Option<String>,
    address_postal_code: Option<String>,
    address_country_code: Option<String>,
    /// Phone number.
    phone_number: Option<String>,
    /// IP address the person signed up from.
    ip_address: Option<String>,
    /// Free-form note attached at creation.
    note: Option<String>,
    /// IDs of question sets created for this person.
    #[serde(default)]
    question_sets: Vec<String>,
}

impl Person {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the verification concluded the submitted information is
    /// valid.
    pub fn is_valid(&self) -> bool {
        ValidityStatus::from_wire(self.status.as_deref()) == ValidityStatus::Valid
    }

    /// Verification breakdown.
    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub fn name_first(&self) -> Option<&str> {
        self.name_first.as_deref()
    }

    pub fn name_middle(&self) -> Option<&str> {
        self.name_middle.as_deref()
    }

    pub fn name_last(&self) -> Option<&str> {
        self.name_last.as_deref()
    }

    pub fn document_type(&self) -> Option<&str> {
        self.document_type.as_deref()
    }

    pub fn document_value(&self) -> Option<&str> {
        self.document_value.as_deref()
    }

    /// Date of birth reconstructed from the discrete wire parts. `None` if
    /// any part is missing.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        date_from_parts(self.birth_year, self.birth_month, self.birth_day)
    }

    /// Address assembled from the flattened wire fields. `None` unless the
    /// required address fields are present.
    pub fn address(&self) -> Option<Address> {
        Some(Address {
            street1: self.address_street1.clone()?,
            street2: self.address_street2.clone(),
            city: self.address_city.clone()?,
            subdivision: self.address_subdivision.clone()?,
            postal_code: self.address_postal_code.clone()?,
            country_code: self.address_country_code.clone()?,
        })
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// IDs of question sets created for this person.
    pub fn question_sets(&self) -> &[String] {
        &self.question_sets
    }
}

/// A company registered for verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    id: String,
    /// Raw validity status.
    status: Option<String>,
    /// Verification breakdown.
    details: Option<Details>,
    /// Legal name, excluding endings like "Co" or "Inc".
    entity_name: Option<String>,
    /// Tax ID, digits only.
    tax_id: Option<String>,
    /// State of incorporation, ISO code or full name.
    incorporation_state: Option<String>,
    /// ISO alpha-2 country of incorporation.
    incorporation_country_code: Option<String>,
    /// Raw corporation type.
    incorporation_type: Option<String>,
    /// Day-of-month part of the incorporation date.
    incorporation_day: Option<u32>,
    /// Month part of the incorporation date, 1-indexed (January = 1).
    incorporation_month: Option<u32>,
    /// Year part of the incorporation date.
    incorporation_year: Option<i32>,
    /// Comma-delimited "doing business as" names.
    dbas: Option<String>,
    /// State-assigned registration number, digits only.
    registration_number: Option<String>,
    /// Contact email.
    email: Option<String>,
    /// Company website.
    url: Option<String>,
    /// Phone number.
    phone_number: Option<String>,
    /// IP address the company signed up from.
    ip_address: Option<String>,
    /// Free-form note attached at creation.
    note: Option<String>,
    address_street1: Option<String>,
    address_street2: Option<String>,
    address_city: Option<String>,
    address_subdivision: Option<String>,
    address_postal_code: Option<String>,
    address_country_code: Option<String>,
}

impl Company {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the verification concluded the submitted information is
    /// valid.
    pub fn is_valid(&self) -> bool {
        ValidityStatus::from_wire(self.status.as_deref()) == ValidityStatus::Valid
    }

    /// Verification breakdown.
    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub fn entity_name(&self) -> Option<&str> {
        self.entity_name.as_deref()
    }

    pub fn tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref()
    }

    pub fn incorporation_state(&self) -> Option<&str> {
        self.incorporation_state.as_deref()
    }

    pub fn incorporation_country_code(&self) -> Option<&str> {
        self.incorporation_country_code.as_deref()
    }

    /// Legal structure of the company. Unrecognized wire values coerce to
    /// [`CorporationType::Other`].
    pub fn incorporation_type(&self) -> CorporationType {
        CorporationType::from_wire(self.incorporation_type.as_deref())
    }

    /// Incorporation date reconstructed from the discrete wire parts.
    /// `None` if any part is missing.
    pub fn incorporation_date(&self) -> Option<NaiveDate> {
        date_from_parts(
            self.incorporation_year,
            self.incorporation_month,
            self.incorporation_day,
        )
    }

    /// "Doing business as" names, split from the comma-delimited wire
    /// value. An absent or empty wire value yields an empty vec.
    pub fn dbas(&self) -> Vec<String> {
        split_delimited(self.dbas.as_deref())
    }

    pub fn registration_number(&self) -> Option<&str> {
        self.registration_number.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Address assembled from the flattened wire fields.
    pub fn address(&self) -> Option<Address> {
        Some(Address {
            street1: self.address_street1.clone()?,
            street2: self.address_street2.clone(),
            city: self.address_city.clone()?,
            subdivision: self.address_subdivision.clone()?,
            postal_code: self.address_postal_code.clone()?,
            country_code: self.address_country_code.clone()?,
        })
    }
}

/// A watchlist candidate: an identity tracked against sanctions and
/// enforcement watchlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier.
    id: String,
    /// Raw validity status.
    status: Option<String>,
    /// First name.
    name_first: Option<String>,
    /// Middle name.
    name_middle: Option<String>,
    /// Last name.
    name_last: Option<String>,
    /// Free-form note.
    note: Option<String>,
    /// Social security number, digits only.
    ssn: Option<String>,
    /// Passport number.
    passport: Option<String>,
    /// Date of birth as an ISO `yyyy-MM-dd` wire string.
    date_of_birth: Option<NaiveDate>,
    address_street1: Option<String>,
    address_street2: Option<String>,
    address_city: Option<String>,
    address_subdivision: Option<String>,
    address_postal_code: Option<String>,
    address_country_code: Option<String>,
}

impl Candidate {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_valid(&self) -> bool {
        ValidityStatus::from_wire(self.status.as_deref()) == ValidityStatus::Valid
    }

    pub fn name_first(&self) -> Option<&str> {
        self.name_first.as_deref()
    }

    pub fn name_middle(&self) -> Option<&str> {
        self.name_middle.as_deref()
    }

    pub fn name_last(&self) -> Option<&str> {
        self.name_last.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn ssn(&self) -> Option<&str> {
        self.ssn.as_deref()
    }

    pub fn passport(&self) -> Option<&str> {
        self.passport.as_deref()
    }

    /// Date of birth. Candidates use the ISO-formatted single-field
    /// convention, unlike the day/month/year parts on persons and
    /// companies.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// Address assembled from the flattened wire fields.
    pub fn address(&self) -> Option<Address> {
        Some(Address {
            street1: self.address_street1.clone()?,
            street2: self.address_street2.clone(),
            city: self.address_city.clone()?,
            subdivision: self.address_subdivision.clone()?,
            postal_code: self.address_postal_code.clone()?,
            country_code: self.address_country_code.clone()?,
        })
    }
}

/// One multiple-choice identity question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier, unique within its question set.
    pub id: u64,
    /// Question text.
    pub question: String,
    /// Possible answers.
    pub answers: Vec<AnswerChoice>,
}

/// One answer choice for a [`Question`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerChoice {
    /// Answer identifier, unique within its question.
    pub id: u64,
    /// Answer text.
    pub answer: String,
}

/// A selected answer submitted when scoring a question set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The question being answered.
    pub question_id: u64,
    /// The chosen answer.
    pub answer_id: u64,
}

impl Answer {
    pub fn new(question_id: u64, answer_id: u64) -> Self {
        Self {
            question_id,
            answer_id,
        }
    }
}

/// A set of identity questions generated for a person.
///
/// `score` and `expired` are updated in place by
/// [`crate::client::Bound::submit_answers`] once the server has scored the submitted
/// answers; this is the only post-construction mutation in the SDK and is
/// not synchronized, so sharing one instance across threads during scoring
/// is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Unique identifier.
    id: String,
    /// ID of the person the questions were generated for.
    person_id: Option<String>,
    /// Percentage score (0.0 - 100.0) once answers have been scored.
    score: Option<f64>,
    /// Whether the time limit has elapsed since creation.
    #[serde(default)]
    expired: bool,
    /// Seconds after creation before `expired` flips to true.
    time_limit: Option<u64>,
    /// The questions to present.
    #[serde(default)]
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn person_id(&self) -> Option<&str> {
        self.person_id.as_deref()
    }

    /// Percentage score, present once the set has been scored.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn time_limit(&self) -> Option<u64> {
        self.time_limit
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Applies the server's authoritative scoring result. Only `score` and
    /// `expired` change.
    pub(crate) fn apply_score(&mut self, scored: &QuestionSet) {
        self.score = scored.score;
        self.expired = scored.expired;
    }
}

/// The result of verifying a person's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    /// Unique identifier.
    id: String,
    /// Raw validity status.
    status: Option<String>,
    /// Verification breakdown. The OFAC rating inside is present on every
    /// valid response.
    details: Option<Details>,
    /// ID of the person this verification concerns, when echoed back.
    person_id: Option<String>,
}

impl Verification {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_valid(&self) -> bool {
        ValidityStatus::from_wire(self.status.as_deref()) == ValidityStatus::Valid
    }

    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub fn person_id(&self) -> Option<&str> {
        self.person_id.as_deref()
    }
}
