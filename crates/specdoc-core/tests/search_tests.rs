use specdoc_core::decode::decode_document;
use specdoc_core::error::SearchError;
use specdoc_core::normalize;
use specdoc_core::search::{self, RelevanceScorer, TokenOverlapScorer};

const PETSTORE: &str = include_str!("fixtures/petstore.json");

fn petstore() -> specdoc_core::model::ApiSpec {
    let document = decode_document(PETSTORE.as_bytes(), 1024 * 1024).unwrap();
    normalize::normalize(&document)
}

#[test]
fn search_matches_path_substring() {
    let hits = search::search(&petstore(), "login").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].endpoint, "/api/login");
    assert_eq!(hits[0].method, "POST");
    assert_eq!(hits[0].summary, "Log in");
    assert_eq!(
        hits[0].description,
        "Exchanges credentials for an access token."
    );
}

#[test]
fn search_matches_verb() {
    let hits = search::search(&petstore(), "POST").unwrap();
    let endpoints: Vec<&str> = hits.iter().map(|h| h.endpoint.as_str()).collect();
    assert_eq!(endpoints, vec!["/pets", "/api/login"]);
}

#[test]
fn search_matches_serialized_details() {
    // "limit" only appears inside the GET /pets parameter list.
    let hits = search::search(&petstore(), "limit").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].endpoint, "/pets");
    assert_eq!(hits[0].method, "GET");
}

#[test]
fn search_is_case_insensitive() {
    let hits = search::search(&petstore(), "LoGiN").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].endpoint, "/api/login");
}

#[test]
fn search_rejects_blank_keywords() {
    assert_eq!(
        search::search(&petstore(), "").unwrap_err(),
        SearchError::EmptyKeyword
    );
    assert_eq!(
        search::search(&petstore(), "   ").unwrap_err(),
        SearchError::EmptyKeyword
    );
}

#[test]
fn search_rejects_oversized_keywords() {
    let keyword = "k".repeat(search::MAX_KEYWORD_CHARS + 1);
    assert!(matches!(
        search::search(&petstore(), &keyword),
        Err(SearchError::KeywordTooLong { .. })
    ));
}

#[test]
fn search_empty_result_is_not_an_error() {
    let hits = search::search(&petstore(), "zebra").unwrap();
    assert!(hits.is_empty());
}

#[test]
fn search_synthesizes_fallback_descriptions() {
    let document = decode_document(
        br#"{"paths": {
            "/things": {"get": {"operationId": "listThings", "tags": ["things"],
                                "parameters": [{"name": "q", "in": "query"}]}},
            "/bare": {"get": {}}
        }}"#,
        1024 * 1024,
    )
    .unwrap();
    let spec = normalize::normalize(&document);

    let hits = search::search(&spec, "things").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].description,
        "GET /things → operation id: listThings; tags: things; parameters: q"
    );

    let hits = search::search(&spec, "bare").unwrap();
    assert_eq!(hits[0].description, "GET /bare → No description available");
}

#[test]
fn token_overlap_scorer_fraction() {
    let scorer = TokenOverlapScorer;
    assert_eq!(scorer.score("user accounts", "Lists user accounts"), 1.0);
    assert_eq!(scorer.score("user accounts", "Lists user roles"), 0.5);
    assert_eq!(scorer.score("payments", "Lists user roles"), 0.0);
}

#[test]
fn search_ranked_applies_cutoff_and_order() {
    let document = decode_document(
        br#"{"paths": {
            "/roles": {"get": {"summary": "Lists user roles"}},
            "/users": {"get": {"summary": "Lists user accounts with details"}},
            "/pets": {"get": {"summary": "Lists pets"}}
        }}"#,
        1024 * 1024,
    )
    .unwrap();
    let spec = normalize::normalize(&document);

    let hits = search::search_ranked(&spec, "user accounts", &TokenOverlapScorer, 10).unwrap();
    // /pets scores 0 and /roles sits exactly at the 0.5 cutoff; only the
    // full match survives.
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].hit.endpoint, "/users");
    assert_eq!(hits[0].score, 1.0);

    let hits = search::search_ranked(&spec, "user", &TokenOverlapScorer, 1).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].hit.endpoint, "/roles");
}

#[test]
fn search_ranked_validates_keywords() {
    assert_eq!(
        search::search_ranked(&petstore(), " ", &TokenOverlapScorer, 5).unwrap_err(),
        SearchError::EmptyKeyword
    );
}
