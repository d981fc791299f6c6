//! Dual-Protocol Contract Tests
//!
//! Both front-ends run on ephemeral ports against one shared store; writes
//! through one must be visible through the other, and both must report the
//! same failures.

use glossary_api_rest::{RestServer, RestServerConfig, RestServerHandle};
use glossary_api_rpc::{RpcServer, RpcServerConfig};
use glossary_core::application::GlossaryService;
use glossary_infra_memory::InMemoryTermRepository;
use glossary_sdk::{GlossaryClient, TermPayload, TermUpdatePayload};
use jsonrpsee::server::ServerHandle;
use serde_json::{json, Value};
use std::sync::Arc;

struct Harness {
    rpc: GlossaryClient,
    rest_base: String,
    http: reqwest::Client,
    rpc_handle: ServerHandle,
    rest_handle: RestServerHandle,
}

impl Harness {
    async fn start() -> Self {
        let service = GlossaryService::new(Arc::new(InMemoryTermRepository::seeded()));

        let rpc_config = RpcServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Default::default()
        };
        let (rpc_addr, rpc_handle) = RpcServer::new(rpc_config, service.clone())
            .start()
            .await
            .unwrap();

        let rest_config = RestServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let rest_handle = RestServer::new(rest_config, service).start().await.unwrap();

        let rpc = GlossaryClient::connect(format!("http://{}", rpc_addr))
            .await
            .unwrap();

        Self {
            rpc,
            rest_base: format!("http://{}", rest_handle.local_addr()),
            http: reqwest::Client::new(),
            rpc_handle,
            rest_handle,
        }
    }

    async fn rest_terms(&self) -> Value {
        self.http
            .get(format!("{}/", self.rest_base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn shutdown(self) {
        self.rpc_handle.stop().unwrap();
        self.rpc_handle.stopped().await;
        self.rest_handle.stop().await.unwrap();
    }
}

#[tokio::test]
async fn test_both_front_ends_see_same_seed() {
    let h = Harness::start().await;

    let rpc_terms = h.rpc.get_all_terms().await.unwrap().terms;
    let rest_terms = h.rest_terms().await;

    assert_eq!(rpc_terms.len(), 5);
    let rest_map = rest_terms.as_object().unwrap();
    assert_eq!(rest_map.len(), 5);

    for term in &rpc_terms {
        assert_eq!(rest_map[&term.title]["definition"], term.definition.as_str());
    }

    h.shutdown().await;
}

#[tokio::test]
async fn test_create_via_rpc_visible_via_rest() {
    let h = Harness::start().await;

    let term = TermPayload {
        title: "lcp".to_string(),
        definition: "Largest contentful paint".to_string(),
        source_link: Some("https://web.dev/lcp".to_string()),
    };
    let created = h.rpc.create_term("lcp", term.clone()).await.unwrap();
    assert_eq!(created, term);

    let rest_terms = h.rest_terms().await;
    assert_eq!(
        rest_terms["lcp"],
        json!({
            "title": "lcp",
            "definition": "Largest contentful paint",
            "source_link": "https://web.dev/lcp"
        })
    );

    // REST now refuses the same keyword
    let response = h
        .http
        .post(format!("{}/term/lcp", h.rest_base))
        .json(&json!({"title": "lcp", "definition": "again"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error_code"], "ALREADY_EXISTS");

    h.shutdown().await;
}

#[tokio::test]
async fn test_update_via_rest_visible_via_rpc() {
    let h = Harness::start().await;

    let response = h
        .http
        .put(format!("{}/term/fps", h.rest_base))
        .json(&json!({"definition": "X", "source_link": "https://example.com/x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let terms = h.rpc.get_all_terms().await.unwrap().terms;
    let fps = terms.iter().find(|t| t.title == "fps").unwrap();
    assert_eq!(fps.definition, "X");
    assert_eq!(fps.source_link.as_deref(), Some("https://example.com/x"));

    h.shutdown().await;
}

#[tokio::test]
async fn test_failures_map_consistently() {
    let h = Harness::start().await;

    // Conflict
    let err = h
        .rpc
        .create_term(
            "fps",
            TermPayload {
                title: "fps".to_string(),
                definition: "dup".to_string(),
                source_link: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_already_exists(), "{err}");
    assert!(err.to_string().contains("'fps'"));

    // Not found
    let update = TermUpdatePayload {
        definition: Some("X".to_string()),
        source_link: None,
    };
    let err = h.rpc.update_term("ghost", update).await.unwrap_err();
    assert!(err.is_not_found(), "{err}");
    assert!(err.to_string().contains("'ghost'"));

    let response = h
        .http
        .put(format!("{}/term/ghost", h.rest_base))
        .json(&json!({"definition": "X"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    // Invalid link
    let update = TermUpdatePayload {
        definition: None,
        source_link: Some("not a url".to_string()),
    };
    let err = h.rpc.update_term("fps", update).await.unwrap_err();
    assert!(err.is_invalid_argument(), "{err}");

    let response = h
        .http
        .post(format!("{}/term/new", h.rest_base))
        .json(&json!({"title": "new", "definition": "d", "source_link": "not a url"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // Nothing above changed the store
    assert_eq!(h.rest_terms().await.as_object().unwrap().len(), 5);

    h.shutdown().await;
}

#[tokio::test]
async fn test_bad_request_does_not_affect_server() {
    let h = Harness::start().await;

    let response = h
        .http
        .post(format!("{}/term/broken", h.rest_base))
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // Server keeps answering afterwards on both front-ends
    assert_eq!(h.rest_terms().await.as_object().unwrap().len(), 5);
    assert_eq!(h.rpc.get_all_terms().await.unwrap().terms.len(), 5);

    h.shutdown().await;
}
