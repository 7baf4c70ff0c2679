use std::{io, net};

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;
use crate::routes::{health_check, request_sample, subscribe};

/// Public URL of the marketing site
pub struct ApplicationBaseUrl(pub String);

/// Address that receives owner notifications
pub struct OwnerEmail(pub EmailAddress);

/// Application
pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Build an application based on settings
    pub fn build(config: Settings) -> anyhow::Result<Self> {
        // Build the email client and resolve the owner's address once, at start-up
        let owner_email = config.owner_email().map_err(anyhow::Error::msg)?;
        let email_client = config.email_client.client()?;

        // Run the HTTP server and return its data
        let listener = net::TcpListener::bind(format!(
            "{}:{}",
            config.application.app_host, config.application.app_port
        ))?;
        let port = listener.local_addr()?.port();
        let server = run_server(
            listener,
            email_client,
            config.application.base_url,
            owner_email,
        )?;
        Ok(Self { server, port })
    }

    /// Get application port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Run application until it is stopped
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Run the HTTP server
pub fn run_server(
    listener: net::TcpListener,
    email_client: EmailClient,
    base_url: String,
    owner_email: EmailAddress,
) -> io::Result<Server> {
    // Prepare data to be added the application context
    let email_client = web::Data::new(email_client);
    let base_url = web::Data::new(ApplicationBaseUrl(base_url));
    let owner_email = web::Data::new(OwnerEmail(owner_email));

    // Start the HTTP server
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/request-sample", web::post().to(request_sample))
                    .route("/subscribe", web::post().to(subscribe)),
            )
            .app_data(email_client.clone())
            .app_data(base_url.clone())
            .app_data(owner_email.clone())
    })
    .listen(listener)?
    .run())
}
