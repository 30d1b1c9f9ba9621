//! Blocking calling convention.
//!
//! [`BlockingClient`] exposes the same operations as [`crate::Client`] but
//! suspends the calling thread until the response arrives. Both conventions
//! share one implementation (the blocking facade drives the async client on
//! a private current-thread runtime), so typed results and error mapping
//! are identical by construction.
//!
//! Creation flows vend the same bound builders as the async client; the
//! terminal `create()` future is driven with [`BlockingClient::wait`]:
//!
//! ```no_run
//! # fn run() -> Result<(), verident::Error> {
//! let client = verident::BlockingClient::from_env()?;
//! let person = client.wait(client.create_person().name_first("John").create())?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use tokio::runtime::Runtime;

use crate::builders::{
    CandidateBuilder, CompanyBuilder, PersonBuilder, QuestionSetBuilder, VerificationBuilder,
};
use crate::client::{Bound, Client};
use crate::config::ClientConfig;
use crate::errors::Error;
use crate::models::{Answer, Candidate, Company, Person, QuestionSet, Verification};
use crate::pagination::{ListParams, PaginatedResult};

/// Blocking variant of [`Client`].
pub struct BlockingClient {
    runtime: Runtime,
    inner: Client,
}

impl BlockingClient {
    /// Creates a blocking client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Configuration(format!("failed to start runtime: {}", e)))?;
        Ok(Self {
            runtime,
            inner: Client::new(config)?,
        })
    }

    /// Creates a blocking client from `VERIDENT_API_KEY` /
    /// `VERIDENT_BASE_URL`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Drives a future from the async surface (a builder's terminal
    /// `create()`, or [`Bound::submit_answers`]) to completion on this
    /// client's runtime.
    pub fn wait<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    // ---- persons ----

    /// Starts a person creation; drive the terminal
    /// [`PersonBuilder::create`] with [`BlockingClient::wait`].
    pub fn create_person(&self) -> PersonBuilder {
        self.inner.create_person()
    }

    pub fn retrieve_person(&self, id: &str) -> Result<Bound<Person>, Error> {
        self.runtime.block_on(self.inner.retrieve_person(id))
    }

    pub fn list_people(&self, params: &ListParams) -> Result<PaginatedResult<Person>, Error> {
        self.runtime.block_on(self.inner.list_people(params))
    }

    // ---- companies ----

    /// Starts a company creation; drive [`CompanyBuilder::create`] with
    /// [`BlockingClient::wait`].
    pub fn create_company(&self) -> CompanyBuilder {
        self.inner.create_company()
    }

    pub fn retrieve_company(&self, id: &str) -> Result<Company, Error> {
        self.runtime.block_on(self.inner.retrieve_company(id))
    }

    pub fn list_companies(&self, params: &ListParams) -> Result<PaginatedResult<Company>, Error> {
        self.runtime.block_on(self.inner.list_companies(params))
    }

    // ---- watchlist candidates ----

    /// Starts a watchlist-candidate creation; drive
    /// [`CandidateBuilder::create`] with [`BlockingClient::wait`].
    pub fn create_candidate(&self) -> CandidateBuilder {
        self.inner.create_candidate()
    }

    pub fn retrieve_candidate(&self, id: &str) -> Result<Candidate, Error> {
        self.runtime.block_on(self.inner.retrieve_candidate(id))
    }

    /// Starts a watchlist-candidate update; drive
    /// [`CandidateBuilder::save`] with [`BlockingClient::wait`].
    pub fn update_candidate(&self, id: &str) -> CandidateBuilder {
        self.inner.update_candidate(id)
    }

    pub fn list_candidates(&self, params: &ListParams) -> Result<PaginatedResult<Candidate>, Error> {
        self.runtime.block_on(self.inner.list_candidates(params))
    }

    // ---- question sets ----

    /// Starts a question-set creation; drive
    /// [`QuestionSetBuilder::create`] with [`BlockingClient::wait`].
    pub fn create_question_set(&self) -> QuestionSetBuilder {
        self.inner.create_question_set()
    }

    pub fn retrieve_question_set(&self, id: &str) -> Result<Bound<QuestionSet>, Error> {
        self.runtime.block_on(self.inner.retrieve_question_set(id))
    }

    pub fn list_question_sets(
        &self,
        params: &ListParams,
    ) -> Result<PaginatedResult<QuestionSet>, Error> {
        self.runtime.block_on(self.inner.list_question_sets(params))
    }

    pub fn score_question_set(&self, id: &str, answers: &[Answer]) -> Result<QuestionSet, Error> {
        self.runtime
            .block_on(self.inner.score_question_set(id, answers))
    }

    // ---- verifications ----

    /// Starts a verification; drive [`VerificationBuilder::create`] with
    /// [`BlockingClient::wait`].
    pub fn create_verification(&self) -> VerificationBuilder {
        self.inner.create_verification()
    }

    pub fn retrieve_verification(&self, id: &str) -> Result<Verification, Error> {
        self.runtime.block_on(self.inner.retrieve_verification(id))
    }

    pub fn list_verifications(
        &self,
        params: &ListParams,
    ) -> Result<PaginatedResult<Verification>, Error> {
        self.runtime.block_on(self.inner.list_verifications(params))
    }
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
