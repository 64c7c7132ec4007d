//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port in a background thread, then
//! drives `PortfolioApi<ReqwestTransport>` over real HTTP. Validates that the
//! canonical DTOs decode what the backend actually serves.

use std::time::Duration;

use mock_server::MockState;
use portfolio_core::{
    load_experience, load_home_page, load_project, try_load_home_page, ApiConfig, ApiError,
    ContactMessage, PortfolioApi, ReqwestTransport, ViewModel,
};

/// Start the mock server with `state` and return its API base URL.
fn start_server(state: MockState) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, state).await
        })
        .unwrap();
    });

    format!("http://{addr}{}", mock_server::API_PREFIX)
}

fn api(base_url: &str) -> PortfolioApi<ReqwestTransport> {
    let config = ApiConfig::new(base_url).with_timeout(Duration::from_secs(5));
    PortfolioApi::new(config, ReqwestTransport::new())
}

#[tokio::test]
async fn home_page_loads_from_backend() {
    let api = api(&start_server(MockState::default()));

    let view = try_load_home_page(&api).await.unwrap();

    let profile = view.profile.unwrap();
    assert_eq!(profile.name, "Jordan Reyes");
    assert_eq!(
        profile.career_interests,
        Some(vec!["Analytics engineering".to_string(), "Experimentation".to_string()])
    );
    assert_eq!(view.experiences.len(), 2);
    assert_eq!(view.experiences[1].kind.as_deref(), Some("Internship"));
    let skills = view.skills.unwrap();
    assert_eq!(skills.programming.unwrap()[0].name, "Python");
    assert_eq!(view.projects[0].github_url.as_deref(), Some("https://github.com/jreyes/churn"));
}

#[tokio::test]
async fn home_page_degrades_when_one_resource_fails() {
    let api = api(&start_server(MockState::default().failing("experiences")));

    let view = load_home_page(&api).await;
    assert_eq!(view, ViewModel::degraded());

    let err = try_load_home_page(&api).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API Error: Internal Server Error");
}

#[tokio::test]
async fn unreachable_backend_degrades() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = api(&format!("http://127.0.0.1:{port}/api/v1"));

    let err = api.get_profile().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
    assert_eq!(load_home_page(&api).await, ViewModel::degraded());
}

#[tokio::test]
async fn detail_endpoints() {
    let api = api(&start_server(MockState::default()));

    let experience = load_experience(&api, "1").await.unwrap();
    assert_eq!(experience.company, "Northwind Retail");

    let education = api.get_education_detail("1").await.unwrap();
    assert_eq!(education["data"]["degree"], "B.S.");

    let list = api.get_education_list().await.unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    assert!(load_project(&api, "999").await.is_none());
    let err = api.get_project("999").await.unwrap_err();
    match err {
        ApiError::Transport { status, message } => {
            assert_eq!(status, Some(404));
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn contact_message_round_trip() {
    let state = MockState::default();
    let inbox = state.inbox();
    let api = api(&start_server(state));

    let message = ContactMessage {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        subject: Some("Hello".to_string()),
        message: "hi".to_string(),
    };
    let ack = api.send_contact_message(&message).await.unwrap();
    assert_eq!(ack["data"]["status"], "received");

    let received = inbox.read().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].subject.as_deref(), Some("Hello"));
    assert_eq!(received[0].message, "hi");
}

#[tokio::test]
async fn contact_rejection_propagates() {
    let api = api(&start_server(MockState::default()));

    let message = ContactMessage {
        name: " ".to_string(),
        email: "a@b.com".to_string(),
        subject: None,
        message: "hi".to_string(),
    };
    let err = api.send_contact_message(&message).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
}
