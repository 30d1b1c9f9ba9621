use std::ops::Deref;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::builders::{
    CandidateBuilder, CompanyBuilder, PersonBuilder, QuestionSetBuilder, VerificationBuilder,
};
use crate::config::ClientConfig;
use crate::errors::Error;
use crate::models::{Answer, Candidate, Company, Person, QuestionSet, Verification};
use crate::pagination::{ListParams, PaginatedResult};

/// Structured error body returned by the API on request failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    param: Option<String>,
}

/// Client for the Verident identity-verification API.
///
/// Owns the API key and the HTTP transport; every resource operation is a
/// single request/response round trip with no internal retries. Cloning is
/// cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// Fails with [`Error::Configuration`] on an empty API key or a
    /// malformed base URL, so misconfiguration surfaces here rather than at
    /// the first network call.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Creates a client from `VERIDENT_API_KEY` / `VERIDENT_BASE_URL`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Wraps an entity with this client so follow-up operations can be
    /// issued without re-supplying the facade.
    pub fn bind<T>(&self, entity: T) -> Bound<T> {
        Bound {
            client: self.clone(),
            inner: entity,
        }
    }

    // ---- persons ----

    /// Starts a person creation. Finish with [`PersonBuilder::create`],
    /// which consumes the builder and issues the request.
    pub fn create_person(&self) -> PersonBuilder {
        PersonBuilder::new(self.clone())
    }

    /// Retrieves a person by ID.
    pub async fn retrieve_person(&self, id: &str) -> Result<Bound<Person>, Error> {
        let person = self
            .request(Method::GET, &format!("people/{}", id), None)
            .await?;
        Ok(self.bind(person))
    }

    /// Lists previously created persons, one page at a time.
    pub async fn list_people(&self, params: &ListParams) -> Result<PaginatedResult<Person>, Error> {
        self.list("people", params).await
    }

    // ---- companies ----

    /// Starts a company creation. Finish with [`CompanyBuilder::create`].
    pub fn create_company(&self) -> CompanyBuilder {
        CompanyBuilder::new(self.clone())
    }

    /// Retrieves a company by ID.
    pub async fn retrieve_company(&self, id: &str) -> Result<Company, Error> {
        self.request(Method::GET, &format!("companies/{}", id), None)
            .await
    }

    /// Lists previously created companies, one page at a time.
    pub async fn list_companies(
        &self,
        params: &ListParams,
    ) -> Result<PaginatedResult<Company>, Error> {
        self.list("companies", params).await
    }

    // ---- watchlist candidates ----

    /// Starts a watchlist-candidate creation. Finish with
    /// [`CandidateBuilder::create`].
    pub fn create_candidate(&self) -> CandidateBuilder {
        CandidateBuilder::for_create(self.clone())
    }

    /// Retrieves a watchlist candidate by ID.
    pub async fn retrieve_candidate(&self, id: &str) -> Result<Candidate, Error> {
        self.request(Method::GET, &format!("candidates/{}", id), None)
            .await
    }

    /// Starts an update of an existing watchlist candidate. Finish with
    /// [`CandidateBuilder::save`]; only the fields set on the builder are
    /// transmitted.
    pub fn update_candidate(&self, id: &str) -> CandidateBuilder {
        CandidateBuilder::for_update(self.clone(), id)
    }

    /// Lists watchlist candidates, one page at a time.
    pub async fn list_candidates(
        &self,
        params: &ListParams,
    ) -> Result<PaginatedResult<Candidate>, Error> {
        self.list("candidates", params).await
    }

    // ---- question sets ----

    /// Starts a question-set creation. Finish with
    /// [`QuestionSetBuilder::create`].
    pub fn create_question_set(&self) -> QuestionSetBuilder {
        QuestionSetBuilder::new(self.clone())
    }

    /// Retrieves a question set by ID.
    pub async fn retrieve_question_set(&self, id: &str) -> Result<Bound<QuestionSet>, Error> {
        let set = self
            .request(Method::GET, &format!("question_sets/{}", id), None)
            .await?;
        Ok(self.bind(set))
    }

    /// Lists question sets, one page at a time.
    pub async fn list_question_sets(
        &self,
        params: &ListParams,
    ) -> Result<PaginatedResult<QuestionSet>, Error> {
        self.list("question_sets", params).await
    }

    /// Submits answers for scoring and returns the server's authoritative
    /// scoring result.
    pub async fn score_question_set(
        &self,
        id: &str,
        answers: &[Answer],
    ) -> Result<QuestionSet, Error> {
        self.request(
            Method::POST,
            &format!("question_sets/{}/score", id),
            Some(json!({ "answers": answers })),
        )
        .await
    }

    // ---- verifications ----

    /// Starts a verification. Finish with [`VerificationBuilder::create`].
    pub fn create_verification(&self) -> VerificationBuilder {
        VerificationBuilder::new(self.clone())
    }

    /// Retrieves a verification by ID.
    pub async fn retrieve_verification(&self, id: &str) -> Result<Verification, Error> {
        self.request(Method::GET, &format!("verifications/{}", id), None)
            .await
    }

    /// Lists verifications, one page at a time.
    pub async fn list_verifications(
        &self,
        params: &ListParams,
    ) -> Result<PaginatedResult<Verification>, Error> {
        self.list("verifications", params).await
    }

    // ---- transport ----

    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &ListParams,
    ) -> Result<PaginatedResult<T>, Error> {
        let mut url = format!("{}/{}", self.base_url, resource);
        let query = params.to_query();
        if !query.is_empty() {
            // form_urlencoded is infallible; no error path at request time
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        self.execute(self.http.request(Method::GET, url.as_str()), resource)
            .await
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, Error> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        self.execute(request, path).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, Error> {
        tracing::debug!("Issuing request to {}", path);

        let response = request
            // Basic authentication: base64(api_key + ":")
            .basic_auth(&self.api_key, Some(""))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Request to {} failed with status {}", path, status);
            return Err(map_error(status, &body));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to decode response from {}: {}", path, e);
            Error::Decode(format!("response from {}: {}", path, e))
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // API key redacted
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Maps a non-2xx response to the error taxonomy. An unparseable error body
/// degrades to [`Error::Server`] instead of raising a secondary parse
/// error.
fn map_error(status: StatusCode, body: &str) -> Error {
    let detail = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.to_string()
            } else {
                body.to_string()
            }
        });

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => match detail {
            Some(detail) => Error::Validation {
                param: detail.param,
                message,
            },
            // 400-class without a structured body is not reinterpreted
            None => Error::Server {
                status: status.as_u16(),
                message,
            },
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authentication(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimit(message),
        _ => Error::Server {
            status: status.as_u16(),
            message,
        },
    }
}

/// An entity bound to the client that produced it.
///
/// Deserialization is a pure data decode; binding is the explicit second
/// phase that grants the entity its follow-up capabilities. Derefs to the
/// wrapped entity for read access. Not synchronized: concurrent mutation
/// of one instance from multiple threads is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Bound<T> {
    client: Client,
    inner: T,
}

impl<T> Bound<T> {
    /// Discards the client, yielding the plain entity.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// The client this entity is bound to.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl<T> Deref for Bound<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl Bound<Person> {
    /// Creates a question set for this person.
    pub async fn create_question_set(
        &self,
        time_limit: Option<u64>,
    ) -> Result<Bound<QuestionSet>, Error> {
        let mut builder = self.client.create_question_set().person_id(self.inner.id());
        if let Some(seconds) = time_limit {
            builder = builder.time_limit(seconds);
        }
        builder.create().await
    }
}

impl Bound<QuestionSet> {
    /// Scores the submitted answers and applies the server's authoritative
    /// result to this instance: on success `score` and `expired` are
    /// updated in place and nothing else changes.
    ///
    /// Named distinctly from the [`QuestionSet::score`] accessor, which
    /// stays reachable through `Deref`.
    pub async fn submit_answers(&mut self, answers: &[Answer]) -> Result<(), Error> {
        let scored = self
            .client
            .score_question_set(self.inner.id(), answers)
            .await?;
        self.inner.apply_score(&scored);
        Ok(())
    }
}
