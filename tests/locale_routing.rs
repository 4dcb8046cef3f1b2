//! End-to-end locale routing over a real socket.

use reqwest::StatusCode;
use serde_json::Value;
use tool_portal::config::PortalConfig;
use tool_portal::http::X_REQUEST_ID;

mod common;

#[tokio::test]
async fn test_default_locale_prefix_redirects() {
    let portal = common::start_portal(PortalConfig::default()).await;
    let res = common::client()
        .get(portal.url("/pl/kalkulatory/kalkulator-bmi"))
        .send()
        .await
        .expect("portal unreachable");

    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()["location"], "/kalkulatory/kalkulator-bmi");
}

#[tokio::test]
async fn test_redirects_never_leave_the_site() {
    let portal = common::start_portal(PortalConfig::default()).await;
    for path in ["/pl//evil.example/", "//evil.example/", "/pl//evil.example"] {
        let res = common::client().get(portal.url(path)).send().await.unwrap();

        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY, "{path}");
        assert_eq!(res.headers()["location"], "/evil.example", "{path}");
    }
}

#[tokio::test]
async fn test_unprefixed_path_is_served_in_default_locale() {
    let portal = common::start_portal(PortalConfig::default()).await;
    let res = common::client()
        .get(portal.url("/kalkulatory/kalkulator-bmi"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.url().path(), "/kalkulatory/kalkulator-bmi");
    assert_eq!(res.headers()["x-locale"], "pl");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], "bmi-calculator");
    assert_eq!(body["name"], "Kalkulator BMI");
}

#[tokio::test]
async fn test_english_passes_through() {
    let portal = common::start_portal(PortalConfig::default()).await;
    let res = common::client()
        .get(portal.url("/en/calculators/bmi-calculator"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-locale"], "en");
    assert!(res.headers().contains_key(X_REQUEST_ID));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "BMI calculator");
    assert_eq!(body["alternates"][0]["url"], "/kalkulatory/kalkulator-bmi");
}

#[tokio::test]
async fn test_language_switch_follows_alternate() {
    let portal = common::start_portal(PortalConfig::default()).await;
    let client = common::client();

    let switched: Value = client
        .get(portal.url("/api/translate"))
        .query(&[("path", "/generatory/generator-hasel"), ("from", "pl"), ("to", "en")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let path = switched["path"].as_str().unwrap();
    assert_eq!(path, "/en/generators/password-generator");

    let page: Value = client.get(portal.url(path)).send().await.unwrap().json().await.unwrap();
    assert_eq!(page["id"], "password-generator");
    assert_eq!(page["locale"], "en");
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let portal = common::start_portal(PortalConfig::default()).await;
    let res = common::client()
        .get(portal.url("/nonexistent/whatever"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_legacy_flat_url_redirects_once() {
    let portal = common::start_portal(PortalConfig::default()).await;
    let client = common::client();

    let res = client.get(portal.url("/pl/generator-hasel")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    let location = res.headers()["location"].to_str().unwrap().to_string();
    assert_eq!(location, "/generatory/generator-hasel");

    let res = client.get(portal.url(&location)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let portal = common::start_portal(PortalConfig::default()).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let path = if i % 2 == 0 {
            "/en/time/stopwatch"
        } else {
            "/czas/stoper"
        };
        let url = portal.url(path);
        tasks.push(tokio::spawn(async move {
            let res = client.get(url).send().await.unwrap();
            (i, res.status(), res.headers()["x-locale"].to_str().unwrap().to_string())
        }));
    }

    for task in tasks {
        let (i, status, locale) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(locale, if i % 2 == 0 { "en" } else { "pl" });
    }
}
