//! Integration tests for the Sheets sink using wiremock HTTP mocks.

use chrono::{NaiveDate, NaiveDateTime};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use podtrend_core::{OpportunityRecord, ServiceAccountKey, SheetsTarget};
use podtrend_sheets::{
    persist_run, AppendOutcome, PersistReport, SheetsClient, SheetsSink, SkipReason, TokenSource,
};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRIVATE_KEY: &str = include_str!("fixtures/test_service_account_key.pem");
const PUBLIC_KEY: &str = include_str!("fixtures/test_service_account_pub.pem");

const OPPORTUNITIES_PATH: &str = "/v4/spreadsheets/sheet-123/values/Opportunities!A:M:append";
const ANALYSIS_PATH: &str = "/v4/spreadsheets/sheet-123/values/Analysis!A:B:append";

fn run_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn static_sink(base_url: &str) -> SheetsSink {
    let client = SheetsClient::with_base_url(
        "sheet-123",
        TokenSource::Static("static-token".to_string()),
        base_url,
    )
    .expect("client construction should not fail");
    SheetsSink::new(client)
}

fn record(niche: &str, demand: Option<i64>) -> OpportunityRecord {
    OpportunityRecord {
        niche: Some(niche.to_string()),
        demand_score: demand,
        ..OpportunityRecord::default()
    }
}

#[tokio::test]
async fn empty_records_issue_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sink = static_sink(&server.uri());
    let report = sink.persist(run_at(), &[], "raw").await;

    assert_eq!(report, PersistReport::Skipped(SkipReason::NoRecords));
}

#[tokio::test]
async fn unconfigured_sink_is_skipped() {
    let report = persist_run(None, run_at(), &[record("Cat Dads", Some(7))], "raw").await;
    assert_eq!(report, PersistReport::Skipped(SkipReason::NotConfigured));
}

#[tokio::test]
async fn appends_opportunity_rows_and_raw_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(OPPORTUNITIES_PATH))
        .and(query_param("valueInputOption", "RAW"))
        .and(header("authorization", "Bearer static-token"))
        .and(body_json(serde_json::json!({
            "values": [
                ["2025-06-01 09:30:00", "Cat Dads", "", "", "", 7, "Medium", "", "", "", "", "Not started", ""],
                ["2025-06-01 09:30:00", "Plant Moms", "", "", "", 5, "Medium", "", "", "", "", "Not started", ""]
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(ANALYSIS_PATH))
        .and(query_param("valueInputOption", "RAW"))
        .and(body_json(serde_json::json!({
            "values": [["2025-06-01 09:30:00", "NICHE NAME: Cat Dads"]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let sink = static_sink(&server.uri());
    let records = [record("Cat Dads", Some(7)), record("Plant Moms", None)];
    let report = sink.persist(run_at(), &records, "NICHE NAME: Cat Dads").await;

    assert_eq!(
        report,
        PersistReport::Attempted {
            opportunities: AppendOutcome::Appended { rows: 2 },
            analysis: AppendOutcome::Appended { rows: 1 },
        }
    );
}

#[tokio::test]
async fn failed_opportunity_append_does_not_block_audit_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(OPPORTUNITIES_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("Unable to parse range"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(ANALYSIS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let sink = static_sink(&server.uri());
    let report = sink
        .persist(run_at(), &[record("Cat Dads", Some(7))], "raw")
        .await;

    match report {
        PersistReport::Attempted {
            opportunities: AppendOutcome::Failed { reason },
            analysis: AppendOutcome::Appended { rows: 1 },
        } => assert!(reason.contains("Unable to parse range"), "{reason}"),
        other => panic!("unexpected report: {other:?}"),
    }
}

#[tokio::test]
async fn service_account_token_is_exchanged_once_and_reused() {
    let server = MockServer::start().await;
    let token_uri = format!("{}/token", server.uri());

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "ya29.test-token",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer ya29.test-token"))
        .and(query_param("valueInputOption", "RAW"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let target = SheetsTarget {
        spreadsheet_id: "sheet-123".to_string(),
        service_account: ServiceAccountKey {
            client_email: "writer@podtrend-test.iam.gserviceaccount.com".to_string(),
            private_key: PRIVATE_KEY.to_string(),
            token_uri: token_uri.clone(),
        },
        base_url: server.uri(),
    };
    let sink = SheetsSink::from_target(&target).expect("sink should build");
    let report = sink
        .persist(run_at(), &[record("Cat Dads", Some(7))], "raw")
        .await;

    assert!(matches!(
        report,
        PersistReport::Attempted {
            opportunities: AppendOutcome::Appended { rows: 1 },
            analysis: AppendOutcome::Appended { rows: 1 },
        }
    ));

    let requests = server.received_requests().await.expect("recording enabled");
    let token_request = requests
        .iter()
        .find(|r| r.url.path() == "/token")
        .expect("token request should be recorded");
    let form = String::from_utf8(token_request.body.clone()).unwrap();
    let assertion = form
        .split('&')
        .find_map(|pair| pair.strip_prefix("assertion="))
        .expect("assertion parameter");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[token_uri.as_str()]);
    validation.set_issuer(&["writer@podtrend-test.iam.gserviceaccount.com"]);
    let decoded = decode::<serde_json::Value>(
        assertion,
        &DecodingKey::from_rsa_pem(PUBLIC_KEY.as_bytes()).unwrap(),
        &validation,
    )
    .expect("assertion should verify against the public key");

    assert_eq!(
        decoded.claims["scope"],
        "https://www.googleapis.com/auth/spreadsheets"
    );
    let iat = decoded.claims["iat"].as_i64().unwrap();
    let exp = decoded.claims["exp"].as_i64().unwrap();
    assert_eq!(exp - iat, 3600);
}

#[tokio::test]
async fn rejected_token_exchange_fails_both_appends() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(OPPORTUNITIES_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let target = SheetsTarget {
        spreadsheet_id: "sheet-123".to_string(),
        service_account: ServiceAccountKey {
            client_email: "writer@podtrend-test.iam.gserviceaccount.com".to_string(),
            private_key: PRIVATE_KEY.to_string(),
            token_uri: format!("{}/token", server.uri()),
        },
        base_url: server.uri(),
    };
    let sink = SheetsSink::from_target(&target).unwrap();
    let report = sink
        .persist(run_at(), &[record("Cat Dads", Some(7))], "raw")
        .await;

    match report {
        PersistReport::Attempted {
            opportunities: AppendOutcome::Failed { reason: first },
            analysis: AppendOutcome::Failed { reason: second },
        } => {
            assert!(first.contains("invalid_grant"), "{first}");
            assert!(second.contains("invalid_grant"), "{second}");
        }
        other => panic!("unexpected report: {other:?}"),
    }
}
