use std::{env, io, sync};

use wiremock::{Match, MockServer, Request};

use livingston_leads::configuration::Settings;
use livingston_leads::startup::Application;
use livingston_leads::telemetry::{get_subscriber, init_subscriber};

/// Address owner notifications are sent to in tests
pub const OWNER_EMAIL: &str = "owner@livingstoncraft.com";

/// Ensure the tracing stack is initialized only once
static TRACING: sync::LazyLock<()> = sync::LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::sink,
        ));
    };
});

/// Test application data
pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up a test application and return its data
    pub async fn spawn() -> Self {
        // Initialize logging
        sync::LazyLock::force(&TRACING);

        // Launch a mock server to stand in for Postmark's API
        let email_server = MockServer::start().await;

        // Get settings and modify them for testing
        let config = {
            let mut c = Settings::get_config().expect("Failed to read configuration");
            // Listen on a random TCP port
            c.application.app_host = "127.0.0.1".into();
            c.application.app_port = 0;
            c.application.owner_email = Some(OWNER_EMAIL.into());
            // Use the mock server as email API
            c.email_client.base_url = email_server.uri();
            c.email_client.timeout_millis = 200;
            c
        };

        // Build the application and get its address
        let app = Application::build(config).expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        // Run the application and return its data
        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run_until_stopped());
        Self {
            address,
            email_server,
            api_client: reqwest::Client::new(),
        }
    }

    /// POST a JSON body to the sample request endpoint
    pub async fn post_request_sample(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/request-sample", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// POST a JSON body to the subscription endpoint
    pub async fn post_subscribe(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/subscribe", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// POST a raw, possibly malformed, body to an endpoint
    pub async fn post_raw(&self, endpoint: &str, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}{endpoint}", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Recipients of the emails received by the mock email API, in order
    pub async fn email_recipients(&self) -> Vec<String> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| email_body(r)["To"].as_str().unwrap().to_owned())
            .collect()
    }
}

/// Parse the JSON body of a request made to the email API
pub fn email_body(request: &Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).unwrap()
}

/// Match email API requests addressed to a specific recipient
pub struct SentTo(pub &'static str);

impl Match for SentTo {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<serde_json::Value>(&request.body)
            .is_ok_and(|body| body["To"] == self.0)
    }
}

/// Assert: response carries the expected status and JSON body
pub async fn assert_json_response(
    response: reqwest::Response,
    status: u16,
    expected: serde_json::Value,
) {
    assert_eq!(response.status().as_u16(), status);
    let body: serde_json::Value = response.json().await.expect("Response is not JSON");
    assert_eq!(body, expected);
}
