use crate::utils::TestApp;

#[tokio::test]
async fn home_greets_with_application_version() {
    let app = TestApp::spawn_server().await;

    let response = app
        .client
        .get(&app.address)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.unwrap();
    assert_eq!(
        body,
        format!(
            "Welcome to ACEest Fitness & Gym! Application Version: {}",
            app.version
        )
    );
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let app = TestApp::spawn_server().await;

    let response = app
        .client
        .get(format!("{}/definitely-not-there", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);
}
