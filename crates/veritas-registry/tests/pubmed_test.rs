//! PubMed client against canned esummary bodies and a local HTTP stub.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use veritas_core::config::RegistryConfig;
use veritas_core::errors::RegistryError;
use veritas_core::traits::IBibliographicRegistry;
use veritas_registry::pubmed::parse_esummary;
use veritas_registry::PubMedRegistry;

/// Serve one HTTP response on a random local port; returns the base URL.
fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}")
}

fn registry_at(base_url: String) -> PubMedRegistry {
    let config = RegistryConfig {
        base_url: Some(base_url),
        timeout_secs: Some(5),
        ..Default::default()
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(config.effective_timeout())
        .no_proxy()
        .build()
        .unwrap();
    PubMedRegistry::with_client(&config, client)
}

#[test]
fn parses_recorded_summary() {
    let body: serde_json::Value = test_fixtures::load_fixture("registry/esummary_12345678.json");
    let record = parse_esummary("12345678", &body).unwrap().unwrap();

    assert_eq!(record.authors, vec!["Smith J", "Doe A"]);
    assert_eq!(record.first_author_surname(), Some("Smith"));
    assert_eq!(record.publication_year(), "2020");
    assert!(record.title.starts_with("Statin therapy"));
}

#[test]
fn error_entry_means_not_found() {
    let body: serde_json::Value = test_fixtures::load_fixture("registry/esummary_not_found.json");
    assert!(parse_esummary("99999999", &body).unwrap().is_none());
}

#[test]
fn absent_identifier_means_not_found() {
    let body = serde_json::json!({"result": {"uids": []}});
    assert!(parse_esummary("12345678", &body).unwrap().is_none());
}

#[test]
fn body_without_result_is_malformed() {
    let body = serde_json::json!({"esummaryresult": ["Invalid uid"]});
    assert!(matches!(
        parse_esummary("12345678", &body),
        Err(RegistryError::MalformedResponse { .. })
    ));
}

#[test]
fn fetches_over_http() {
    let body = test_fixtures::load_text("registry/esummary_12345678.json");
    let registry = registry_at(serve_once("200 OK", body));

    let record = registry.fetch("12345678").unwrap().unwrap();
    assert_eq!(record.identifier, "12345678");
    assert_eq!(record.publication_year(), "2020");
}

#[test]
fn http_error_status_is_reported() {
    let registry = registry_at(serve_once("503 Service Unavailable", String::new()));
    assert!(matches!(
        registry.fetch("12345678"),
        Err(RegistryError::HttpStatus { status: 503, .. })
    ));
}

#[test]
fn non_json_body_is_malformed() {
    let registry = registry_at(serve_once("200 OK", "<html>".to_string()));
    assert!(matches!(
        registry.fetch("12345678"),
        Err(RegistryError::MalformedResponse { .. })
    ));
}

#[test]
fn refused_connection_is_a_network_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let registry = registry_at(format!("http://127.0.0.1:{port}"));
    assert!(matches!(
        registry.fetch("12345678"),
        Err(RegistryError::Network { .. })
    ));
}
