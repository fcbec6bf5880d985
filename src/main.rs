use axum::Router;
use dotenvy::dotenv;
use server_database_provisioner::{
    config::app_config::AppConfig,
    provisioner::{
        build_provisioner_router,
        interfaces::rest::resources::{
            create_provisioned_database_request_resource::CreateProvisionedDatabaseRequestResource,
            database_host_resource::DatabaseHostResource,
            deploy_provisioned_database_request_resource::DeployProvisionedDatabaseRequestResource,
            error_response_resource::ErrorResponseResource,
            provisioned_database_resource::{
                IssuedDatabaseCredentialsResource, ProvisionedDatabaseResource,
            },
            register_database_host_request_resource::RegisterDatabaseHostRequestResource,
        },
    },
};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        server_database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::create_provisioned_database,
        server_database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::deploy_provisioned_database,
        server_database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::list_provisioned_databases,
        server_database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::get_provisioned_database,
        server_database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::rotate_provisioned_database_password,
        server_database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::delete_provisioned_database,
        server_database_provisioner::provisioner::interfaces::rest::controllers::database_host_rest_controller::register_database_host,
        server_database_provisioner::provisioner::interfaces::rest::controllers::database_host_rest_controller::list_database_hosts,
        server_database_provisioner::provisioner::interfaces::rest::controllers::database_host_rest_controller::delete_database_host
    ),
    components(
        schemas(
            CreateProvisionedDatabaseRequestResource,
            DeployProvisionedDatabaseRequestResource,
            ProvisionedDatabaseResource,
            IssuedDatabaseCredentialsResource,
            RegisterDatabaseHostRequestResource,
            DatabaseHostResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "provisioner", description = "Per-server MySQL database provisioning"),
        (name = "database-hosts", description = "Registry of MySQL hosts that receive client databases")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    let provisioner_router = build_provisioner_router(&config)
        .await
        .expect("failed to build provisioner router");

    let app = Router::new()
        .merge(provisioner_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(%addr, "provisioner listening");
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
