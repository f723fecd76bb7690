mod app_state;
mod config;
mod database;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;

use app_state::AppState;
use config::AppConfig;
use database::init::init_db;
use repositories::contact_repository::ContactStore;
use routes::app_routes::create_router;
use services::email_service::EmailService;

#[tokio::main]
async fn main() {
    // Initialize the logger for logging messages
    env_logger::init();

    // Load process configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return;
        }
    };

    // Initialize the database client and handle errors
    let (client, db) = match init_db(&config).await {
        Ok((client, db)) => {
            println!("Database client initialized successfully!");
            (client, db)
        }
        Err(e) => {
            eprintln!("Error initializing the database: {}", e);
            return;
        }
    };

    let mailer = match EmailService::new(&config) {
        Ok(mailer) => mailer,
        Err(e) => {
            eprintln!("Error building the email client: {}", e);
            return;
        }
    };

    let state = AppState::new(ContactStore::new(&db), mailer, config);
    let app = create_router(state);

    // Listen on all IP addresses (0.0.0.0) and port 3000
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    println!("Server running on http://{}", addr);

    // Start the server, binding to the specified address and enabling graceful shutdown
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // Release the store connection once the server has drained
    client.shutdown().await;
    println!("Database client closed");
}

// A function to handle graceful shutdown by listening for termination signals.
async fn shutdown_signal() {
    // Handle Ctrl+C signal for graceful shutdown
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    // Unix-specific signal handling (e.g., SIGTERM)
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    // Wait for either Ctrl+C or the termination signal
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    // Log when shutdown signal is received and starting graceful shutdown
    println!("Signal received, starting graceful shutdown");
}
