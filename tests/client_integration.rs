/// Integration tests against a stub transport.
/// Exercises request building, authentication headers, response mapping and
/// the error taxonomy without hitting the real API.
use verident::{
    Answer, BlockingClient, Client, ClientConfig, CorporationType, Cursor, Error, ListParams,
    MatchRank,
};

use chrono::NaiveDate;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: std::sync::Once = std::sync::Once::new();

/// Helper to build a client pointed at the mock server.
fn test_client(base_url: String) -> Client {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
    Client::new(ClientConfig::new("sk_test_key").with_base_url(base_url)).unwrap()
}

fn test_address() -> verident::Address {
    verident::Address::new("1 Infinite Loop", Some("Apt 6"), "Cupertino", "CA", "95014", "US")
}

#[tokio::test]
async fn create_person_sends_basic_auth_and_accept_headers() {
    let mock_server = MockServer::start().await;

    // base64("sk_test_key:")
    Mock::given(method("POST"))
        .and(path("/people"))
        .and(header("Authorization", "Basic c2tfdGVzdF9rZXk6"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "prs_1",
            "status": "valid"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let person = client.create_person().create().await.unwrap();
    assert_eq!(person.id(), "prs_1");
}

#[tokio::test]
async fn create_person_with_all_fields_yields_valid_entity() {
    let mock_server = MockServer::start().await;

    let dob = NaiveDate::from_ymd_opt(1980, 8, 23).unwrap();

    // The request must carry the decomposed date parts and flattened
    // address under their exact wire names.
    Mock::given(method("POST"))
        .and(path("/people"))
        .and(body_partial_json(serde_json::json!({
            "name_first": "John",
            "name_last": "Doe",
            "document_type": "ssn",
            "document_value": "0000",
            "birth_day": 23,
            "birth_month": 8,
            "birth_year": 1980,
            "address_street1": "1 Infinite Loop",
            "address_country_code": "US"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "prs_1",
            "status": "valid",
            "name_first": "John",
            "name_last": "Doe",
            "birth_day": 23,
            "birth_month": 8,
            "birth_year": 1980,
            "details": {
                "address": "match",
                "address_risk": "low",
                "identification": "match",
                "date_of_birth": "match",
                "ofac": "no_match"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let person = client
        .create_person()
        .name_first("John")
        .name_middle("Pearce")
        .name_last("Doe")
        .document_type("ssn")
        .document_value("0000")
        .date_of_birth(dob)
        .address(&test_address())
        .create()
        .await
        .unwrap();

    assert_eq!(person.id(), "prs_1");
    assert!(person.is_valid());
    assert_eq!(person.name_first(), Some("John"));
    assert_eq!(person.date_of_birth(), Some(dob));
    let details = person.details().expect("details");
    assert_eq!(details.ofac_match(), MatchRank::NoMatch);
    assert_eq!(details.address_match(), MatchRank::Match);
}

#[tokio::test]
async fn missing_required_field_surfaces_validation_error_naming_it() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Entity name is required.",
                "param": "entity_name"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let result = client.create_company().tax_id("123410000").create().await;

    match result {
        Err(Error::Validation { param, message }) => {
            assert_eq!(param.as_deref(), Some("entity_name"));
            assert_eq!(message, "Entity name is required.");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_company_echoes_typed_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/companies"))
        .and(body_partial_json(serde_json::json!({
            "entity_name": "BlockRemit",
            "tax_id": "123410000",
            "incorporation_type": "corporation",
            "incorporation_day": 23,
            "incorporation_month": 8,
            "incorporation_year": 1980,
            "dbas": "BitRemit,Acme"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "cmp_1",
            "status": "valid",
            "entity_name": "BlockRemit",
            "tax_id": "123410000",
            "incorporation_type": "corporation",
            "incorporation_day": 23,
            "incorporation_month": 8,
            "incorporation_year": 1980,
            "dbas": "BitRemit,Acme",
            "details": { "entity_name": "match", "tax_id": "match", "ofac": "no_match" }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let company = client
        .create_company()
        .entity_name("BlockRemit")
        .tax_id("123410000")
        .incorporation_state("DE")
        .incorporation_country_code("US")
        .incorporation_type(CorporationType::Corporation)
        .incorporation_date(NaiveDate::from_ymd_opt(1980, 8, 23).unwrap())
        .dbas(&["BitRemit", "Acme"])
        .address(&test_address())
        .create()
        .await
        .unwrap();

    assert_eq!(company.id(), "cmp_1");
    assert!(company.is_valid());
    assert_eq!(company.incorporation_type(), CorporationType::Corporation);
    assert_eq!(
        company.incorporation_date(),
        NaiveDate::from_ymd_opt(1980, 8, 23)
    );
    assert_eq!(company.dbas(), vec!["BitRemit", "Acme"]);
    assert_eq!(
        company.details().unwrap().entity_name_match(),
        MatchRank::Match
    );
}

#[tokio::test]
async fn scoring_updates_score_and_expired_in_place() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/question_sets/qst_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "qst_1",
            "person_id": "prs_1",
            "score": null,
            "expired": false,
            "time_limit": 0,
            "questions": [
                {
                    "id": 1,
                    "question": "What state was your SSN issued in?",
                    "answers": [
                        { "id": 1, "answer": "California" },
                        { "id": 2, "answer": "None of the above" }
                    ]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/question_sets/qst_1/score"))
        .and(body_partial_json(serde_json::json!({
            "answers": [ { "question_id": 1, "answer_id": 1 } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "qst_1",
            "person_id": "prs_1",
            "score": 87,
            "expired": true,
            "time_limit": 0
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let mut set = client.retrieve_question_set("qst_1").await.unwrap();
    assert_eq!(set.score(), None);
    assert!(!set.is_expired());

    set.submit_answers(&[Answer::new(1, 1)]).await.unwrap();

    // Score and expiry reflect the server's result; nothing else moved.
    assert_eq!(set.score(), Some(87.0));
    assert!(set.is_expired());
    assert_eq!(set.id(), "qst_1");
    assert_eq!(set.person_id(), Some("prs_1"));
    assert_eq!(set.questions().len(), 1);
}

#[tokio::test]
async fn pagination_concatenates_sequential_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .and(query_param("cursor", "tok_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [ { "id": "prs_3" }, { "id": "prs_4" } ],
            "total_count": 4,
            "next_cursor": null
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [ { "id": "prs_1" }, { "id": "prs_2" } ],
            "total_count": 4,
            "next_cursor": "tok_2"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let first = client.list_people(&ListParams::first_page()).await.unwrap();
    assert_eq!(first.total_count(), 4);
    let cursor = first.next_cursor().cloned().expect("cursor");

    let second = client.list_people(&ListParams::after(cursor)).await.unwrap();
    assert!(second.next_cursor().is_none());

    let mut ids: Vec<String> = Vec::new();
    ids.extend(first.into_iter().map(|p| p.id().to_string()));
    ids.extend(second.into_iter().map(|p| p.id().to_string()));
    assert_eq!(ids, vec!["prs_1", "prs_2", "prs_3", "prs_4"]);
}

#[tokio::test]
async fn update_candidate_patches_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/candidates/cnd_1"))
        .and(body_partial_json(serde_json::json!({ "passport" : "123456789" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cnd_1",
            "name_first": "John",
            "name_last": "Doe",
            "passport": "123456789",
            "date_of_birth": "1980-08-23"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let candidate = client
        .update_candidate("cnd_1")
        .passport("123456789")
        .save()
        .await
        .unwrap();

    assert_eq!(candidate.id(), "cnd_1");
    assert_eq!(candidate.passport(), Some("123456789"));
    assert_eq!(
        candidate.date_of_birth(),
        NaiveDate::from_ymd_opt(1980, 8, 23)
    );
}

#[tokio::test]
async fn create_verification_returns_details_with_ofac() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/verifications"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "vrf_1",
            "status": "valid",
            "person_id": "prs_1",
            "details": { "ofac": "no_match" }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let verification = client
        .create_verification()
        .name_first("John")
        .name_last("Doe")
        .document_type("ssn")
        .document_value("0000")
        .date_of_birth(NaiveDate::from_ymd_opt(1980, 8, 23).unwrap())
        .address(&test_address())
        .create()
        .await
        .unwrap();

    assert_eq!(verification.id(), "vrf_1");
    assert!(verification.is_valid());
    assert_eq!(
        verification.details().unwrap().ofac_match(),
        MatchRank::NoMatch
    );
}

#[tokio::test]
async fn bound_person_creates_question_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/prs_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "prs_1",
            "status": "valid"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/question_sets"))
        .and(body_partial_json(serde_json::json!({
            "person_id": "prs_1",
            "time_limit": 300
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "qst_1",
            "person_id": "prs_1",
            "expired": false,
            "questions": []
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let person = client.retrieve_person("prs_1").await.unwrap();
    let set = person.create_question_set(Some(300)).await.unwrap();
    assert_eq!(set.id(), "qst_1");
    assert_eq!(set.person_id(), Some("prs_1"));
}

#[tokio::test]
async fn error_statuses_map_to_taxonomy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/prs_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": { "message": "No such person: prs_missing" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/prs_auth"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/prs_throttled"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/prs_broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    match client.retrieve_person("prs_missing").await {
        Err(Error::NotFound(message)) => assert_eq!(message, "No such person: prs_missing"),
        other => panic!("expected not-found, got {:?}", other.map(|_| ())),
    }
    assert!(matches!(
        client.retrieve_person("prs_auth").await,
        Err(Error::Authentication(_))
    ));
    assert!(matches!(
        client.retrieve_person("prs_throttled").await,
        Err(Error::RateLimit(_))
    ));
    assert!(matches!(
        client.retrieve_person("prs_broken").await,
        Err(Error::Server { status: 500, .. })
    ));
}

#[tokio::test]
async fn unparseable_error_body_degrades_to_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    assert!(matches!(
        client.create_person().create().await,
        Err(Error::Server { status: 400, .. })
    ));
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/prs_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    assert!(matches!(
        client.retrieve_person("prs_1").await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn cursor_values_are_query_encoded() {
    let mock_server = MockServer::start().await;

    // Reserved characters in the token must survive the round trip intact.
    Mock::given(method("GET"))
        .and(path("/people"))
        .and(query_param("cursor", "tok 2&page=9"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [],
            "total_count": 0,
            "next_cursor": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let params = ListParams::after(Cursor::new("tok 2&page=9")).with_limit(25);
    let page = client.list_people(&params).await.unwrap();
    assert!(page.data().is_empty());
}

#[tokio::test]
async fn empty_api_key_fails_at_construction() {
    let result = Client::new(ClientConfig::new(""));
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[tokio::test]
async fn concurrent_requests_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "prs_1",
            "status": "valid"
        })))
        .expect(10)
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let mut handles = vec![];
    for _ in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.retrieve_person("prs_1").await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}

#[test]
fn blocking_client_matches_async_results() {
    // Drive the mock server on a side runtime; the blocking client owns its
    // own and must not run inside an async context.
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mock_server = runtime.block_on(async {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/prs_1"))
            .and(header("Authorization", "Basic c2tfdGVzdF9rZXk6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "prs_1",
                "status": "valid"
            })))
            .mount(&mock_server)
            .await;
        mock_server
    });

    let client =
        BlockingClient::new(ClientConfig::new("sk_test_key").with_base_url(mock_server.uri()))
            .unwrap();

    let person = client.retrieve_person("prs_1").unwrap();
    assert_eq!(person.id(), "prs_1");
    assert!(person.is_valid());
}

#[test]
fn blocking_client_maps_errors_identically() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mock_server = runtime.block_on(async {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/question_sets"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "message": "Person ID is required.", "param": "person_id" }
            })))
            .mount(&mock_server)
            .await;
        mock_server
    });

    let client =
        BlockingClient::new(ClientConfig::new("sk_test_key").with_base_url(mock_server.uri()))
            .unwrap();

    match client.wait(client.create_question_set().create()) {
        Err(Error::Validation { param, .. }) => assert_eq!(param.as_deref(), Some("person_id")),
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn cursor_is_opaque_and_round_trips() {
    let cursor = Cursor::new("tok_abc");
    assert_eq!(cursor.as_str(), "tok_abc");
}
