//! Rust client SDK for the Verident identity-verification REST API.
//!
//! The SDK serializes request builders into wire payloads, performs
//! authenticated HTTP calls, and deserializes responses into typed models
//! for persons, companies, watchlist candidates, question sets and
//! verifications.
//!
//! # Modules
//!
//! - `blocking`: Blocking calling convention over the same operations.
//! - `builders`: Request-side builders, one per creatable entity.
//! - `client`: The async client facade and the `Bound` capability wrapper.
//! - `config`: Client configuration.
//! - `errors`: Error taxonomy.
//! - `models`: Response-side entities and value objects.
//! - `pagination`: Cursor-based list pagination.
//! - `ratings`: String-backed result classifications.
//!
//! # Example
//!
//! ```no_run
//! use verident::{Client, ClientConfig};
//!
//! # async fn run() -> Result<(), verident::Error> {
//! let client = Client::new(ClientConfig::new("sk_test_key"))?;
//! let person = client
//!     .create_person()
//!     .name_first("John")
//!     .name_last("Doe")
//!     .document_type("ssn")
//!     .document_value("0000")
//!     .create()
//!     .await?;
//! println!("valid: {}", person.is_valid());
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod builders;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod ratings;

pub use blocking::BlockingClient;
pub use builders::{
    CandidateBuilder, CompanyBuilder, PersonBuilder, QuestionSetBuilder, VerificationBuilder,
};
pub use client::{Bound, Client};
pub use config::ClientConfig;
pub use errors::Error;
pub use models::{
    Address, Answer, AnswerChoice, Candidate, Company, Details, Person, Question, QuestionSet,
    Verification,
};
pub use pagination::{Cursor, ListParams, PaginatedResult};
pub use ratings::{AddressRisk, CorporationType, MatchRank, ValidityStatus};
