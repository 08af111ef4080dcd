//! End-to-end checks of the route adapters against a mocked provider.

use std::time::Duration;

use bidkit::api::{
    self, ErrorBody, EstimateRequest, ProposalRequest, SuggestResponseRequest,
};
use bidkit::{CompletionGateway, GatewayConfig};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> CompletionGateway {
    let config = GatewayConfig::new("test-key")
        .unwrap()
        .with_endpoint_url(format!("{}/v1/chat/completions", server.uri()))
        .with_model_id("mock-model")
        .with_timeout(Duration::from_secs(5));
    CompletionGateway::from_config(&config).unwrap()
}

fn completion_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
}

#[tokio::test]
async fn proposal_route_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion_response("Dear client, here is my proposal."))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let response = api::propose(
        &gateway,
        ProposalRequest {
            job_description: "Build a logo".to_string(),
            tone: Some("friendly".to_string()),
            skills: Some("branding, Illustrator".to_string()),
        },
    )
    .await
    .expect("proposal");
    assert_eq!(response.proposal_text, "Dear client, here is my proposal.");

    // The optional parameters must reach the rendered prompt.
    let requests = server.received_requests().await.expect("recorded requests");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("friendly"));
    assert!(prompt.contains("branding, Illustrator"));
}

#[tokio::test]
async fn estimate_route_returns_parsed_sections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion_response(
            "Estimated Time: 2 weeks\nEstimated Cost: $1,500\nResources: 1 developer",
        ))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let response = api::estimate(
        &gateway,
        EstimateRequest {
            project_description: "Landing page".to_string(),
        },
    )
    .await
    .expect("estimate");
    assert_eq!(response.estimated_time.as_deref(), Some("2 weeks"));
    assert_eq!(response.estimated_cost.as_deref(), Some("$1,500"));
    assert_eq!(response.resources.as_deref(), Some("1 developer"));
}

#[tokio::test]
async fn suggest_response_route_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion_response("Yes, Monday works for me."))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let response = api::suggest_response(
        &gateway,
        SuggestResponseRequest {
            incoming_message: "Can you start Monday?".to_string(),
            tone: None,
        },
    )
    .await
    .expect("suggestion");
    assert_eq!(response.suggested_response, "Yes, Monday works for me.");
}

#[tokio::test]
async fn failures_serialize_into_the_shared_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let err = api::propose(
        &gateway,
        ProposalRequest {
            job_description: "Build a logo".to_string(),
            tone: None,
            skills: None,
        },
    )
    .await
    .expect_err("provider failure");

    assert_eq!(err.http_status(), 502);
    let body = serde_json::to_value(ErrorBody::from(&err)).unwrap();
    assert_eq!(body["error"]["kind"], "provider_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn validation_failures_map_to_400_without_a_provider_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion_response("unused"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let err = api::estimate(
        &gateway,
        EstimateRequest {
            project_description: "   ".to_string(),
        },
    )
    .await
    .expect_err("validation failure");

    assert_eq!(err.http_status(), 400);
    let body = serde_json::to_value(ErrorBody::from(&err)).unwrap();
    assert_eq!(body["error"]["kind"], "validation_error");

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty());
}
