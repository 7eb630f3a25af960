//! Advice workflow integration tests
//!
//! These drive the controller through the real HTTP client against a
//! mock advisor backend, from profile file to ordered recommendations.

use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use advice_client::{
    build_controller, load_profile, testing::test_helpers, ApiClient, ClientConfig, HealthApi,
    HomeApi, Phase, Priority,
};
use test_helpers::recommendation_json;

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(format!("{}/api", server.uri()))
        .with_timeout_seconds(5)
        .with_development(false)
}

async fn mount_happy_backend(server: &MockServer, home_id: &str) {
    Mock::given(method("POST"))
        .and(path("/api/homes"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({ "size_sqft": 2000 })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(test_helpers::home_response_json(home_id)),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/homes/{home_id}/advice")))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_helpers::advice_json(
            home_id,
            vec![
                recommendation_json("LED lighting", "low", Some("easy"), Some(120.0)),
                recommendation_json("Heat pump", "critical", Some("difficult"), Some(12000.0)),
                recommendation_json("Loft insulation", "high", Some("moderate"), Some(1500.0)),
                recommendation_json("Draught proofing", "high", Some("easy"), Some(200.0)),
                recommendation_json("Solar panels", "critical", Some("difficult"), None),
            ],
        )))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_workflow_orders_recommendations() {
    let server = MockServer::start().await;
    mount_happy_backend(&server, "home-42").await;

    let controller = build_controller(&config_for(&server)).unwrap();
    controller.generate_advice(&test_helpers::sample_profile()).await;

    let state = controller.state();
    assert_eq!(state.phase(), Phase::Success);
    assert!(state.error.is_none());

    let advice = state.advice.unwrap();
    assert_eq!(advice.home_id, "home-42");

    let titles: Vec<&str> = advice
        .recommendations
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Solar panels",
            "Heat pump",
            "Draught proofing",
            "Loft insulation",
            "LED lighting",
        ]
    );
    assert_eq!(advice.recommendations[0].priority, Priority::Critical);
}

#[tokio::test]
async fn test_workflow_from_profile_file() {
    let server = MockServer::start().await;
    mount_happy_backend(&server, "home-7").await;

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("energy-advisor.toml");
    fs::write(
        &config_path,
        format!(
            "base_url = \"{}/api\"\ntimeout_seconds = 5\n",
            server.uri()
        ),
    )
    .unwrap();

    let profile_path = dir.path().join("home.json");
    fs::write(
        &profile_path,
        serde_json::to_string(&test_helpers::sample_profile()).unwrap(),
    )
    .unwrap();

    let config = ClientConfig::load_from_file(&config_path).unwrap();
    let profile = load_profile(&profile_path).unwrap();
    assert!(profile.validate().is_ok());

    let controller = build_controller(&config).unwrap();
    controller.generate_advice(&profile).await;

    let state = controller.state();
    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.advice.unwrap().recommendations.len(), 5);
}

#[tokio::test]
async fn test_get_home_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/homes/home-9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(test_helpers::home_response_json("home-9")),
        )
        .mount(&server)
        .await;

    let homes = HomeApi::new(ApiClient::new(&config_for(&server)).unwrap());
    let home = homes.get_home("home-9").await.unwrap();

    assert_eq!(home.id, "home-9");
    assert_eq!(home.profile, test_helpers::sample_profile());
}

#[tokio::test]
async fn test_health_uses_origin_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .expect(1)
        .mount(&server)
        .await;

    let health = HealthApi::new(ApiClient::new(&config_for(&server)).unwrap())
        .check()
        .await
        .unwrap();

    assert!(health.is_healthy());
}
