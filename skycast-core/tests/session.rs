//! End-to-end session tests: scripted console input against wiremock HTTP mocks.

use serde_json::{Value, json};
use skycast_core::{
    Config, ScriptedConsole, Session,
    session::{CITY_PROMPT, GENERIC_FAILURE, LOCATION_UNREACHABLE, NOT_FOUND, WEATHER_UNREACHABLE},
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INVALID: &str = "Invalid selection.";

fn session_for(server: &MockServer) -> Session {
    Session::from_config(&Config::default().with_base_url(&server.uri()))
        .expect("session construction should not fail")
}

fn candidate(name: &str, admin1: Option<&str>, latitude: f64, longitude: f64) -> Value {
    json!({
        "name": name,
        "admin1": admin1,
        "country": "United States",
        "latitude": latitude,
        "longitude": longitude,
        "timezone": "America/Chicago"
    })
}

fn current(temperature: f64, humidity: u8, wind: f64) -> Value {
    json!({
        "current": {
            "temperature_2m": temperature,
            "relative_humidity_2m": humidity,
            "wind_speed_10m": wind
        }
    })
}

async fn mount_search(server: &MockServer, city: &str, results: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, latitude: &str, template: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", latitude))
        .respond_with(template)
        .expect(calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn single_match_reports_without_selection_prompt() {
    let server = MockServer::start().await;
    mount_search(&server, "Chicago", json!([candidate("Chicago", Some("Illinois"), 41.85, -87.65)])).await;
    mount_forecast(&server, "41.85", ResponseTemplate::new(200).set_body_json(current(0.0, 64, 10.0)), 1)
        .await;

    let mut console = ScriptedConsole::new(["Chicago", "x"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    assert!(!console.contains("Choose a location"));
    assert!(!console.contains("Multiple matches"));
    assert_eq!(console.count("Showing weather for: Chicago, Illinois, United States"), 1);
    assert!(console.transcript().iter().any(|l| l.starts_with("Current time: ")));
    assert_eq!(console.count("Current temperature: 32 °F (0 °C)"), 1);
    assert_eq!(console.count("Relative Humidity: 64%"), 1);
    assert_eq!(console.count("Wind Speed: 6.2 mph (10.0 km/h)"), 1);
    assert_eq!(console.count("Goodbye!"), 1);
}

#[tokio::test]
async fn multiple_matches_reprompt_until_valid_choice() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "Springfield",
        json!([
            candidate("Springfield", Some("Illinois"), 39.80, -89.64),
            candidate("Springfield", Some("Missouri"), 37.21, -93.29),
            candidate("Springfield", None, 42.10, -72.59),
        ]),
    )
    .await;
    mount_forecast(&server, "39.8", ResponseTemplate::new(200).set_body_json(current(20.0, 50, 5.0)), 0)
        .await;
    mount_forecast(&server, "37.21", ResponseTemplate::new(200).set_body_json(current(100.0, 10, 0.0)), 1)
        .await;

    let mut console =
        ScriptedConsole::new(["Springfield", "abc", "0", "4", "", "2.0", "2", "X"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    assert_eq!(console.count("1. Springfield, Illinois, United States"), 1);
    assert_eq!(console.count("2. Springfield, Missouri, United States"), 1);
    assert_eq!(console.count("3. Springfield, N/A, United States"), 1);
    assert_eq!(console.count("Choose a location by number (1-3): "), 6);
    assert_eq!(console.count(INVALID), 5);
    assert_eq!(console.count("Showing weather for: Springfield, Missouri, United States"), 1);
    assert_eq!(console.count("Current temperature: 212 °F (100 °C)"), 1);
    assert_eq!(console.remaining_input(), 0);
}

#[tokio::test]
async fn zero_matches_skip_forecast() {
    let server = MockServer::start().await;
    mount_search(&server, "Atlantis", json!([])).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current(0.0, 0, 0.0)))
        .expect(0)
        .mount(&server)
        .await;

    let mut console = ScriptedConsole::new(["Atlantis", "x"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    assert_eq!(console.count(NOT_FOUND), 1);
    assert!(!console.contains("Showing weather for"));
    assert_eq!(console.count(CITY_PROMPT), 2);
}

#[tokio::test]
async fn forecast_failure_leaves_session_usable() {
    let server = MockServer::start().await;
    mount_search(&server, "Broken", json!([candidate("Broken", None, 10.5, 20.5)])).await;
    mount_search(&server, "Working", json!([candidate("Working", None, 30.5, 40.5)])).await;
    mount_forecast(&server, "10.5", ResponseTemplate::new(503), 1).await;
    mount_forecast(&server, "30.5", ResponseTemplate::new(200).set_body_json(current(-17.2, 80, 3.6)), 1)
        .await;

    let mut console = ScriptedConsole::new(["Broken", "Working", "x"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    let transcript = console.transcript();
    let failure = transcript
        .iter()
        .position(|l| l == WEATHER_UNREACHABLE)
        .expect("forecast failure should be reported");

    // nothing from a report between the failure and the next prompt
    assert_eq!(transcript[failure + 2], CITY_PROMPT);
    assert_eq!(console.count("Current temperature: 1 °F (-17 °C)"), 1);
    assert_eq!(console.count("Wind Speed: 2.2 mph (3.6 km/h)"), 1);
    assert_eq!(console.transcript().iter().filter(|l| l.starts_with("Current time: ")).count(), 1);
}

#[tokio::test]
async fn geocoding_failure_is_reported_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut console = ScriptedConsole::new(["Paris", "x"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    assert_eq!(console.count(LOCATION_UNREACHABLE), 1);
    assert_eq!(console.count(NOT_FOUND), 1);
    assert_eq!(console.count("Goodbye!"), 1);
}

#[tokio::test]
async fn malformed_geocoding_json_is_generic_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let mut console = ScriptedConsole::new(["Paris", "x"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    assert_eq!(console.count(GENERIC_FAILURE), 1);
    assert_eq!(console.count(NOT_FOUND), 1);
}

#[tokio::test]
async fn malformed_forecast_prints_no_partial_report() {
    let server = MockServer::start().await;
    mount_search(&server, "Oslo", json!([candidate("Oslo", None, 59.91, 10.75)])).await;
    mount_forecast(
        &server,
        "59.91",
        ResponseTemplate::new(200).set_body_json(json!({
            "current": { "temperature_2m": 4.0, "wind_speed_10m": 12.0 }
        })),
        1,
    )
    .await;

    let mut console = ScriptedConsole::new(["Oslo", "x"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    assert_eq!(console.count(GENERIC_FAILURE), 1);
    assert!(!console.contains("Current time:"));
    assert!(!console.contains("Current temperature:"));
}

#[tokio::test]
async fn invalid_timezone_falls_back_with_warning() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "Oddtown",
        json!([{
            "name": "Oddtown",
            "latitude": 5.25,
            "longitude": 6.25,
            "timezone": "Not/AZone"
        }]),
    )
    .await;
    mount_forecast(&server, "5.25", ResponseTemplate::new(200).set_body_json(current(25.0, 30, 1.0)), 1)
        .await;

    let mut console = ScriptedConsole::new(["Oddtown", "x"]);
    session_for(&server).run(&mut console).await.expect("session should finish");

    assert_eq!(console.count("Invalid timezone from API: Not/AZone, using system default."), 1);
    assert_eq!(console.count("Showing weather for: Oddtown"), 1);
    assert_eq!(console.count("Current temperature: 77 °F (25 °C)"), 1);
}
