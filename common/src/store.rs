use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ error::StoreError, models::{ seed_products, seed_users, Order, Product, User } };

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ResourceStore {
	/// All products, in insertion order
	async fn list_products(&self) -> Vec<Product>;

	/// First product whose id equals `id`
	async fn get_product(&self, id: i64) -> StoreResult<Product>;

	/// Append a product unless its id is already taken
	async fn create_product(&self, product: Product) -> StoreResult<Product>;

	/// All orders, in insertion order
	async fn list_orders(&self) -> Vec<Order>;

	/// Append an order as submitted. Never fails.
	async fn create_order(&self, order: Order) -> Order;

	/// All users, in insertion order
	async fn list_users(&self) -> Vec<User>;
}

/// Process-memory store. Each collection has its own lock, and product
/// creation holds the write lock across the id check and the append.
#[derive(Debug, Default)]
pub struct InMemoryStore {
	products: RwLock<Vec<Product>>,
	orders: RwLock<Vec<Order>>,
	users: RwLock<Vec<User>>,
}

impl InMemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn seeded() -> Self {
		Self::with_data(seed_products(), Vec::new(), seed_users())
	}

	pub fn with_data(products: Vec<Product>, orders: Vec<Order>, users: Vec<User>) -> Self {
		Self {
			products: RwLock::new(products),
			orders: RwLock::new(orders),
			users: RwLock::new(users),
		}
	}
}

#[async_trait]
impl ResourceStore for InMemoryStore {
	async fn list_products(&self) -> Vec<Product> {
		self.products.read().await.clone()
	}

	async fn get_product(&self, id: i64) -> StoreResult<Product> {
		self.products
			.read().await
			.iter()
			.find(|p| p.id == id)
			.cloned()
			.ok_or(StoreError::ProductNotFound(id))
	}

	async fn create_product(&self, product: Product) -> StoreResult<Product> {
		let mut products = self.products.write().await;
		if products.iter().any(|p| p.id == product.id) {
			return Err(StoreError::DuplicateProduct(product.id));
		}
		products.push(product.clone());
		Ok(product)
	}

	async fn list_orders(&self) -> Vec<Order> {
		self.orders.read().await.clone()
	}

	async fn create_order(&self, order: Order) -> Order {
		self.orders.write().await.push(order.clone());
		order
	}

	async fn list_users(&self) -> Vec<User> {
		self.users.read().await.clone()
	}
}
