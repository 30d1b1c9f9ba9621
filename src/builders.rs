//! Request-side builders: mutable accumulators of wire-field values.
//!
//! Builders are vended by the facade (`Client::create_person` and friends),
//! carry the client they were vended from, and are consumed exactly once by
//! the terminal [`create`](PersonBuilder::create) call that issues the
//! network request. Single use is enforced by move semantics. Optional
//! values that are never set are simply absent from the payload; the wire
//! contract is that omitted fields are not transmitted at all.
//!
//! No required-field validation happens locally. A missing required field
//! is reported by the server as a structured 400 naming the parameter,
//! surfaced as [`crate::Error::Validation`].

use chrono::{Datelike, NaiveDate};
use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::client::{Bound, Client};
use crate::errors::Error;
use crate::models::{Address, Candidate, Company, Person, QuestionSet, Verification};
use crate::ratings::CorporationType;

fn put_address(params: &mut Map<String, Value>, address: &Address) {
    params.insert("address_street1".to_string(), json!(address.street1()));
    if let Some(street2) = address.street2() {
        params.insert("address_street2".to_string(), json!(street2));
    }
    params.insert("address_city".to_string(), json!(address.city()));
    params.insert(
        "address_subdivision".to_string(),
        json!(address.subdivision()),
    );
    params.insert(
        "address_postal_code".to_string(),
        json!(address.postal_code()),
    );
    params.insert(
        "address_country_code".to_string(),
        json!(address.country_code()),
    );
}

/// Builder for creating a person. Vended by [`Client::create_person`].
#[derive(Debug)]
pub struct PersonBuilder {
    client: Client,
    params: Map<String, Value>,
}

impl PersonBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            params: Map::new(),
        }
    }

    pub fn name_first(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_first".to_string(), json!(value.into()));
        self
    }

    pub fn name_middle(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_middle".to_string(), json!(value.into()));
        self
    }

    pub fn name_last(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_last".to_string(), json!(value.into()));
        self
    }

    /// Identification document type, e.g. `"ssn"` or `"passport"`.
    pub fn document_type(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("document_type".to_string(), json!(value.into()));
        self
    }

    /// Identification document value, digits only.
    pub fn document_value(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("document_value".to_string(), json!(value.into()));
        self
    }

    /// Date of birth, decomposed into the three discrete wire fields
    /// `birth_day`, `birth_month` and `birth_year`. The month is submitted
    /// 1-indexed (January = 1).
    pub fn date_of_birth(mut self, date: NaiveDate) -> Self {
        self.params.insert("birth_day".to_string(), json!(date.day()));
        self.params
            .insert("birth_month".to_string(), json!(date.month()));
        self.params
            .insert("birth_year".to_string(), json!(date.year()));
        self
    }

    /// Expands into the six `address_*` wire fields.
    pub fn address(mut self, address: &Address) -> Self {
        put_address(&mut self.params, address);
        self
    }

    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("phone_number".to_string(), json!(value.into()));
        self
    }

    pub fn ip_address(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("ip_address".to_string(), json!(value.into()));
        self
    }

    pub fn note(mut self, value: impl Into<String>) -> Self {
        self.params.insert("note".to_string(), json!(value.into()));
        self
    }

    /// Issues the creation request, consuming the builder.
    pub async fn create(self) -> Result<Bound<Person>, Error> {
        let client = self.client.clone();
        let person: Person = client
            .request(Method::POST, "people", Some(self.into_body()))
            .await?;
        Ok(client.bind(person))
    }

    /// Consumes the builder, yielding the accumulated request body.
    pub(crate) fn into_body(self) -> Value {
        Value::Object(self.params)
    }
}

/// Builder for creating a company. Vended by [`Client::create_company`].
#[derive(Debug)]
pub struct CompanyBuilder {
    client: Client,
    params: Map<String, Value>,
}

impl CompanyBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            params: Map::new(),
        }
    }

    /// Legal name of the entity. Exclude endings like "Co" or "Inc" for
    /// best results.
    pub fn entity_name(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("entity_name".to_string(), json!(value.into()));
        self
    }

    /// Tax ID, digits only.
    pub fn tax_id(mut self, value: impl Into<String>) -> Self {
        self.params.insert("tax_id".to_string(), json!(value.into()));
        self
    }

    /// State of incorporation, ISO code or full name.
    pub fn incorporation_state(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("incorporation_state".to_string(), json!(value.into()));
        self
    }

    /// ISO alpha-2 country of incorporation.
    pub fn incorporation_country_code(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("incorporation_country_code".to_string(), json!(value.into()));
        self
    }

    pub fn incorporation_type(mut self, value: CorporationType) -> Self {
        self.params
            .insert("incorporation_type".to_string(), json!(value.as_str()));
        self
    }

    /// Incorporation date, decomposed into `incorporation_day`,
    /// `incorporation_month` and `incorporation_year`. The month is
    /// submitted 1-indexed (January = 1).
    pub fn incorporation_date(mut self, date: NaiveDate) -> Self {
        self.params
            .insert("incorporation_day".to_string(), json!(date.day()));
        self.params
            .insert("incorporation_month".to_string(), json!(date.month()));
        self.params
            .insert("incorporation_year".to_string(), json!(date.year()));
        self
    }

    /// "Doing business as" names, joined into the comma-delimited wire
    /// value.
    pub fn dbas(mut self, names: &[&str]) -> Self {
        self.params.insert("dbas".to_string(), json!(names.join(",")));
        self
    }

    /// State-assigned registration number, digits only.
    pub fn registration_number(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("registration_number".to_string(), json!(value.into()));
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.params.insert("email".to_string(), json!(value.into()));
        self
    }

    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.params.insert("url".to_string(), json!(value.into()));
        self
    }

    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("phone_number".to_string(), json!(value.into()));
        self
    }

    pub fn ip_address(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("ip_address".to_string(), json!(value.into()));
        self
    }

    pub fn note(mut self, value: impl Into<String>) -> Self {
        self.params.insert("note".to_string(), json!(value.into()));
        self
    }

    /// Expands into the six `address_*` wire fields.
    pub fn address(mut self, address: &Address) -> Self {
        put_address(&mut self.params, address);
        self
    }

    /// Issues the creation request, consuming the builder.
    pub async fn create(self) -> Result<Company, Error> {
        let client = self.client.clone();
        client
            .request(Method::POST, "companies", Some(self.into_body()))
            .await
    }

    pub(crate) fn into_body(self) -> Value {
        Value::Object(self.params)
    }
}

/// Builder for creating or updating a watchlist candidate. Vended by
/// [`Client::create_candidate`] (finish with [`create`](Self::create)) or
/// [`Client::update_candidate`] (finish with [`save`](Self::save)).
#[derive(Debug)]
pub struct CandidateBuilder {
    client: Client,
    method: Method,
    path: String,
    params: Map<String, Value>,
}

impl CandidateBuilder {
    pub(crate) fn for_create(client: Client) -> Self {
        Self {
            client,
            method: Method::POST,
            path: "candidates".to_string(),
            params: Map::new(),
        }
    }

    pub(crate) fn for_update(client: Client, id: &str) -> Self {
        Self {
            client,
            method: Method::PATCH,
            path: format!("candidates/{}", id),
            params: Map::new(),
        }
    }

    pub fn name_first(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_first".to_string(), json!(value.into()));
        self
    }

    pub fn name_middle(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_middle".to_string(), json!(value.into()));
        self
    }

    pub fn name_last(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_last".to_string(), json!(value.into()));
        self
    }

    pub fn note(mut self, value: impl Into<String>) -> Self {
        self.params.insert("note".to_string(), json!(value.into()));
        self
    }

    /// Social security number, digits only.
    pub fn ssn(mut self, value: impl Into<String>) -> Self {
        self.params.insert("ssn".to_string(), json!(value.into()));
        self
    }

    pub fn passport(mut self, value: impl Into<String>) -> Self {
        self.params.insert("passport".to_string(), json!(value.into()));
        self
    }

    /// Date of birth. Candidates use the single ISO `yyyy-MM-dd` field
    /// convention, not the day/month/year parts.
    pub fn date_of_birth(mut self, date: NaiveDate) -> Self {
        self.params.insert(
            "date_of_birth".to_string(),
            json!(date.format("%Y-%m-%d").to_string()),
        );
        self
    }

    /// Expands into the six `address_*` wire fields.
    pub fn address(mut self, address: &Address) -> Self {
        put_address(&mut self.params, address);
        self
    }

    /// Issues the creation request, consuming the builder.
    pub async fn create(self) -> Result<Candidate, Error> {
        self.send().await
    }

    /// Issues the update request, consuming the builder. Only the fields
    /// set on the builder are transmitted.
    pub async fn save(self) -> Result<Candidate, Error> {
        self.send().await
    }

    async fn send(self) -> Result<Candidate, Error> {
        let client = self.client.clone();
        let method = self.method.clone();
        let path = self.path.clone();
        client.request(method, &path, Some(self.into_body())).await
    }

    pub(crate) fn into_body(self) -> Value {
        Value::Object(self.params)
    }
}

/// Builder for creating a question set. Vended by
/// [`Client::create_question_set`].
#[derive(Debug)]
pub struct QuestionSetBuilder {
    client: Client,
    params: Map<String, Value>,
}

impl QuestionSetBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            params: Map::new(),
        }
    }

    /// The person to generate questions for.
    pub fn person_id(mut self, value: impl Into<String>) -> Self {
        self.params.insert("person_id".to_string(), json!(value.into()));
        self
    }

    /// Seconds before the question set expires. The server default applies
    /// when unset.
    pub fn time_limit(mut self, seconds: u64) -> Self {
        self.params.insert("time_limit".to_string(), json!(seconds));
        self
    }

    /// Issues the creation request, consuming the builder.
    pub async fn create(self) -> Result<Bound<QuestionSet>, Error> {
        let client = self.client.clone();
        let set: QuestionSet = client
            .request(Method::POST, "question_sets", Some(self.into_body()))
            .await?;
        Ok(client.bind(set))
    }

    pub(crate) fn into_body(self) -> Value {
        Value::Object(self.params)
    }
}

/// Builder for creating a verification. Vended by
/// [`Client::create_verification`]. Carries the same identity fields as
/// [`PersonBuilder`]; the verifications resource accepts a person-shaped
/// payload.
#[derive(Debug)]
pub struct VerificationBuilder {
    client: Client,
    params: Map<String, Value>,
}

impl VerificationBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            params: Map::new(),
        }
    }

    pub fn name_first(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_first".to_string(), json!(value.into()));
        self
    }

    pub fn name_middle(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_middle".to_string(), json!(value.into()));
        self
    }

    pub fn name_last(mut self, value: impl Into<String>) -> Self {
        self.params.insert("name_last".to_string(), json!(value.into()));
        self
    }

    pub fn document_type(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("document_type".to_string(), json!(value.into()));
        self
    }

    pub fn document_value(mut self, value: impl Into<String>) -> Self {
        self.params
            .insert("document_value".to_string(), json!(value.into()));
        self
    }

    /// Date of birth, decomposed into `birth_day`, `birth_month` and
    /// `birth_year`. The month is submitted 1-indexed (January = 1).
    pub fn date_of_birth(mut self, date: NaiveDate) -> Self {
        self.params.insert("birth_day".to_string(), json!(date.day()));
        self.params
            .insert("birth_month".to_string(), json!(date.month()));
        self.params
            .insert("birth_year".to_string(), json!(date.year()));
        self
    }

    /// Expands into the six `address_*` wire fields.
    pub fn address(mut self, address: &Address) -> Self {
        put_address(&mut self.params, address);
        self
    }

    /// Issues the creation request, consuming the builder.
    pub async fn create(self) -> Result<Verification, Error> {
        let client = self.client.clone();
        client
            .request(Method::POST, "verifications", Some(self.into_body()))
            .await
    }

    pub(crate) fn into_body(self) -> Value {
        Value::Object(self.params)
    }
}
