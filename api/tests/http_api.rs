use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use clap::Parser;
use ingredient_copilot_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_with(extra_args: &[&str]) -> TestServer {
    let mut argv = vec!["ingredient-copilot-api"];
    argv.extend_from_slice(extra_args);
    let args = Arc::new(Args::try_parse_from(argv).unwrap());

    let app = router(state(args).unwrap()).unwrap();
    TestServer::new(app).unwrap()
}

fn server_without_key() -> TestServer {
    server_with(&["--google-api-key", ""])
}

fn server_against(gemini: &MockServer) -> TestServer {
    let base_url = gemini.uri();
    server_with(&[
        "--google-api-key",
        "test-key",
        "--gemini-base-url",
        &base_url,
        "--gemini-timeout-secs",
        "5",
    ])
}

fn gemini_reply(analysis: &Value) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": analysis.to_string() }] }
        }]
    })
}

fn sample_analysis() -> Value {
    json!({
        "what_stands_out": "Red 40 and sodium benzoate.",
        "why_it_matters": "Both are common markers of heavily processed drinks.",
        "uncertainty": "Research on dyes in children is mixed.",
        "recommendation": "Fine occasionally, water most days.",
        "inferred_intent": "Is this safe for my kids?"
    })
}

#[tokio::test]
async fn root_reports_running() {
    let server = server_without_key();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Ingredient Copilot API is running" }));
}

#[tokio::test]
async fn sample_data_lists_three_products() {
    let server = server_without_key();

    let response = server.get("/sample-data").await;

    response.assert_status_ok();
    let products: Vec<Value> = response.json();
    assert_eq!(products.len(), 3);
    let ids: Vec<&str> = products.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(
        products[0]["ingredients"],
        "Carbonated Water, High Fructose Corn Syrup, Citric Acid, Natural Flavors, Caffeine, Sodium Benzoate, Red 40"
    );
    assert_eq!(
        products[1]["ingredients"],
        "Almond Base (Filtered Water, Almonds), Sea Salt, Locust Bean Gum, Sunflower Lecithin, Gellan Gum, Vitamin A Palmitate, Ergocalciferol (Vitamin D2)"
    );
    assert_eq!(products[2]["name"], "Potato Chips");
}

#[tokio::test]
async fn analyze_without_text_is_bad_request() {
    let server = server_without_key();

    for body in [
        json!({}),
        json!({ "ingredients_text": "", "product_name": "" }),
        json!({ "image_data": "aGVsbG8=" }),
        json!({ "ingredients_text": null, "product_name": null }),
    ] {
        let response = server.post("/analyze").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "detail": "No ingredients or product name provided" }));
    }
}

#[tokio::test]
async fn analyze_without_key_returns_mock_fields() {
    let server = server_without_key();

    for body in [
        json!({ "ingredients_text": "Potatoes, Salt" }),
        json!({ "product_name": "Energy Drink" }),
    ] {
        let response = server.post("/analyze").json(&body).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "inferred_intent": "Is this a healthy snack choice?",
            "what_stands_out": "Mock Analysis: No API Key provided.",
            "why_it_matters": "I cannot perform real AI analysis without a GOOGLE_API_KEY.",
            "uncertainty": "Everything is uncertain in mock mode.",
            "recommendation": "Please provide an API key in the .env file."
        }));
    }
}

#[tokio::test]
async fn analyze_returns_model_output_unchanged() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&sample_analysis())))
        .expect(1)
        .mount(&gemini)
        .await;
    let server = server_against(&gemini);

    let response = server
        .post("/analyze")
        .json(&json!({ "ingredients_text": "Water, Red 40" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&sample_analysis());
}

#[tokio::test]
async fn analyze_forwards_ingredients_over_product_name() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Analyze these ingredients:\\nPotatoes, Salt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&sample_analysis())))
        .expect(1)
        .mount(&gemini)
        .await;
    let server = server_against(&gemini);

    let response = server
        .post("/analyze")
        .json(&json!({ "ingredients_text": "Potatoes, Salt", "product_name": "Potato Chips" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&sample_analysis());
}

#[tokio::test]
async fn analyze_falls_back_to_later_candidate() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&gemini)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&sample_analysis())))
        .expect(1)
        .mount(&gemini)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&json!({}))))
        .expect(0)
        .mount(&gemini)
        .await;
    let server = server_against(&gemini);

    let response = server
        .post("/analyze")
        .json(&json!({ "product_name": "Organic Almond Milk" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&sample_analysis());
}

#[tokio::test]
async fn analyze_total_failure_is_still_ok() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&gemini)
        .await;
    let server = server_against(&gemini);

    let response = server
        .post("/analyze")
        .json(&json!({ "ingredients_text": "Salt" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    for field in [
        "what_stands_out",
        "why_it_matters",
        "uncertainty",
        "recommendation",
        "inferred_intent",
    ] {
        assert!(!body[field].as_str().unwrap().is_empty(), "{field} is empty");
    }
    assert_eq!(body["inferred_intent"], "Unable to infer intent");
    assert!(
        body["what_stands_out"]
            .as_str()
            .unwrap()
            .starts_with("Analysis failed: All models failed. Last error:")
    );
}

#[tokio::test]
async fn analyze_ignores_image_data_and_text_length() {
    let server = server_without_key();
    let long_list = "Salt, ".repeat(1000);

    for body in [
        json!({ "ingredients_text": "Salt", "image_data": "not base64!" }),
        json!({ "ingredients_text": long_list }),
        json!({ "product_name": "x".repeat(6000), "image_data": "%%%" }),
    ] {
        let response = server.post("/analyze").json(&body).await;

        response.assert_status_ok();
        let analysis: Value = response.json();
        assert_eq!(analysis["what_stands_out"], "Mock Analysis: No API Key provided.");
    }
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = server_without_key();

    let response = server
        .get("/sample-data")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = server_without_key();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/analyze"]["post"].is_object());
}
