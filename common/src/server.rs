use axum::{ extract::State, http::StatusCode, routing::get, Json, Router };
use std::sync::Arc;
use tokio::net::TcpListener;
use anyhow::Result;
use tracing::{ info, warn };

use crate::{
	config::ServerConfig,
	error::{ ApiError, ErrorBody },
	extract::{ ValidJson, ValidPath },
	models::{ HealthStatus, Order, Product, ServiceInfo, User },
	store::ResourceStore,
};

pub const SERVICE_NAME: &str = "E-commerce API";
pub const SERVICE_VERSION: &str = "1.0.0";

// Shared state for the API
pub struct AppState<T: ResourceStore + Send + Sync + 'static> {
	pub store: T,
}

// Build the router around an explicitly constructed store
pub fn router<T: ResourceStore + Send + Sync + 'static>(store: T) -> Router {
	let state = Arc::new(AppState { store });

	Router::new()
		.route("/", get(root_handler))
		.route("/health", get(health_handler))
		.route("/products", get(list_products_handler::<T>).post(create_product_handler::<T>))
		.route("/products/:id", get(get_product_handler::<T>))
		.route("/orders", get(list_orders_handler::<T>).post(create_order_handler::<T>))
		.route("/users", get(list_users_handler::<T>))
		.fallback(fallback_handler)
		.method_not_allowed_fallback(method_not_allowed_handler)
		.with_state(state)
}

// Run the API server with the provided store until Ctrl-C
pub async fn run_server<T: ResourceStore + Send + Sync + 'static>(
	store: T,
	config: &ServerConfig
) -> Result<()> {
	// Initialize tracing
	tracing_subscriber::fmt::init();

	let app = router(store);

	let addr = config.socket_addr().await?;
	info!("Server listening on {}", addr);

	let listener = TcpListener::bind(addr).await?;
	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	info!("Server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for shutdown signal: {:?}", e);
		std::future::pending::<()>().await;
	}
	info!("Shutdown signal received");
}

async fn root_handler() -> Json<ServiceInfo> {
	Json(ServiceInfo {
		message: SERVICE_NAME.to_string(),
		version: SERVICE_VERSION.to_string(),
	})
}

async fn health_handler() -> Json<HealthStatus> {
	Json(HealthStatus { status: "healthy".to_string() })
}

async fn list_products_handler<T: ResourceStore + Send + Sync + 'static>(State(
	state,
): State<Arc<AppState<T>>>) -> Json<Vec<Product>> {
	info!("List products handler");
	Json(state.store.list_products().await)
}

async fn get_product_handler<T: ResourceStore + Send + Sync + 'static>(
	State(state): State<Arc<AppState<T>>>,
	ValidPath(id): ValidPath<i64>
) -> Result<Json<Product>, ApiError> {
	info!("Get product handler: {}", id);
	let product = state.store.get_product(id).await.map_err(|e| {
		info!("Product {} not found", id);
		ApiError::from(e)
	})?;
	Ok(Json(product))
}

async fn create_product_handler<T: ResourceStore + Send + Sync + 'static>(
	State(state): State<Arc<AppState<T>>>,
	ValidJson(product): ValidJson<Product>
) -> Result<Json<Product>, ApiError> {
	info!("Create product handler: {}", product.id);
	let product = state.store.create_product(product).await.map_err(|e| {
		warn!("Product creation rejected: {}", e);
		ApiError::from(e)
	})?;
	Ok(Json(product))
}

async fn list_orders_handler<T: ResourceStore + Send + Sync + 'static>(State(
	state,
): State<Arc<AppState<T>>>) -> Json<Vec<Order>> {
	info!("List orders handler");
	Json(state.store.list_orders().await)
}

async fn create_order_handler<T: ResourceStore + Send + Sync + 'static>(
	State(state): State<Arc<AppState<T>>>,
	ValidJson(order): ValidJson<Order>
) -> Json<Order> {
	info!("Create order handler: {}", order.id);
	Json(state.store.create_order(order).await)
}

async fn list_users_handler<T: ResourceStore + Send + Sync + 'static>(State(
	state,
): State<Arc<AppState<T>>>) -> Json<Vec<User>> {
	info!("List users handler");
	Json(state.store.list_users().await)
}

async fn fallback_handler() -> (StatusCode, Json<ErrorBody>) {
	(StatusCode::NOT_FOUND, Json(ErrorBody { detail: "Not Found".to_string() }))
}

async fn method_not_allowed_handler() -> (StatusCode, Json<ErrorBody>) {
	(StatusCode::METHOD_NOT_ALLOWED, Json(ErrorBody { detail: "Method Not Allowed".to_string() }))
}
