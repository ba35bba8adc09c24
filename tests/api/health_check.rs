use std::collections::HashMap;

use crate::utils::TestApp;

#[tokio::test]
async fn health_check_reports_up_and_version() {
    let app = TestApp::spawn_server().await;
    let api_addr = format!("{}/health", app.address);

    let response = app
        .client
        .get(api_addr)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body: HashMap<String, String> = response.json().await.unwrap();
    assert_eq!(body.get("status").unwrap(), "UP");
    assert_eq!(body.get("version").unwrap(), &app.version);
}

#[tokio::test]
async fn healthcheck_should_return_200_even_if_url_with_extra_trailing_slash() {
    let app = TestApp::spawn_server().await;
    let api_addr = format!("{}/health/", app.address);

    let response = app
        .client
        .get(api_addr)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
}
