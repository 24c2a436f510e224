use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use score_predict::config::{LoggingSettings, Settings};
use score_predict::routes::{self, AppState};
use score_predict::Predictor;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // No configured logging yet; report through the default subscriber
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Score Predict service...");
    info!("Configuration loaded successfully");

    // Model (if any) is loaded here, once, before the server binds
    let predictor = Predictor::from_settings(&settings.prediction)
        .await
        .map_err(|e| {
            error!("Failed to initialize predictor: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;

    info!("Predictor initialized ({} strategy)", predictor.strategy_name());

    let app_state = AppState { predictor };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
