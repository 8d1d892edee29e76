use clinidesk_core::{CoreConfig, FrontDesk};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Clinidesk application.
///
/// Starts the REST server over the front-desk services.
///
/// # Environment Variables
/// - `CLINIDESK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CLINIDESK_CLINIC_NAME`: clinic name used in banners and logs
///   (default: "Clinidesk")
/// - `CLINIDESK_SEED_DEMO`: start with the demo dataset loaded; set to
///   "0" or "false" to start empty (default: seeded)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinidesk=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("CLINIDESK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let clinic_name =
        std::env::var("CLINIDESK_CLINIC_NAME").unwrap_or_else(|_| "Clinidesk".into());
    let seed_demo = std::env::var("CLINIDESK_SEED_DEMO")
        .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
        .unwrap_or(true);

    let config = CoreConfig::new(clinic_name, seed_demo)?;

    tracing::info!("++ Starting {} REST on {}", config.clinic_name(), rest_addr);

    let desk = FrontDesk::new(&config);
    let app = api_rest::router(desk);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
