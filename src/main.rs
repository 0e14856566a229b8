use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use homelink_backend::api::{
    AccountsApi, AuthApi, ConstructionsApi, EmergenciesApi, HealthApi, NotificationsApi,
    PaymentsApi, ReportsApi, RequestsApi,
};
use homelink_backend::app_data::AppData;
use homelink_backend::config::{self, Secrets, Settings};
use homelink_backend::services::{AccountService, NotificationService, TokenService};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::logging::init_logging().expect("Failed to initialize logging");

    let settings = Settings::from_env();

    // No insecure fallback: refuse to start without a proper signing secret
    let secrets = Secrets::init().expect("JWT_SECRET must be set to at least 32 characters");

    let db = config::database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");
    config::database::migrate(&db)
        .await
        .expect("Failed to run migrations");

    let app_data = AppData::init(db, secrets);

    let token_service = Arc::new(TokenService::new(
        app_data.secrets.jwt_secret().to_string(),
    ));
    let account_service = Arc::new(AccountService::new(
        app_data.account_store.clone(),
        token_service.clone(),
    ));
    let notification_service = Arc::new(NotificationService::new(
        app_data.account_store.clone(),
        app_data.notification_store.clone(),
    ));

    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.db.clone()),
            AuthApi::new(account_service.clone(), token_service.clone()),
            AccountsApi::new(account_service),
            PaymentsApi::new(app_data.payment_store.clone()),
            ReportsApi::new(app_data.report_store.clone()),
            EmergenciesApi::new(app_data.emergency_store.clone()),
            RequestsApi::new(app_data.request_store.clone()),
            ConstructionsApi::new(app_data.construction_store.clone()),
            NotificationsApi::new(app_data.notification_store.clone(), notification_service),
        ),
        "HomeLink Community API",
        "1.0.0",
    )
    .server("http://localhost:3000");

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.bind_addr);
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(settings.bind_addr))
        .run(app)
        .await
}
