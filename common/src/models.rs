use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: i64,
	pub name: String,
	pub price: f64,
	#[serde(default)]
	pub description: Option<String>,
	pub category: String,
	pub stock: i64,
}

/// One `{product_id, quantity}` entry of an order. Neither field is checked
/// against the product collection. Any other keys are kept and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
	pub product_id: i64,
	pub quantity: i64,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
	pub id: i64,
	pub user_id: i64,
	pub products: Vec<LineItem>,
	pub total_amount: f64,
	pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: i64,
	pub email: String,
	pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
	pub message: String,
	pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
	pub status: String,
}

// Startup data held by a freshly seeded store
pub fn seed_products() -> Vec<Product> {
	vec![
		Product {
			id: 1,
			name: "Laptop".to_string(),
			price: 999.99,
			description: Some("High-performance laptop".to_string()),
			category: "Electronics".to_string(),
			stock: 50,
		},
		Product {
			id: 2,
			name: "Mouse".to_string(),
			price: 29.99,
			description: Some("Wireless mouse".to_string()),
			category: "Electronics".to_string(),
			stock: 100,
		},
		Product {
			id: 3,
			name: "Book".to_string(),
			price: 19.99,
			description: Some("Programming book".to_string()),
			category: "Books".to_string(),
			stock: 75,
		}
	]
}

pub fn seed_users() -> Vec<User> {
	vec![User {
		id: 1,
		email: "user@example.com".to_string(),
		name: "John Doe".to_string(),
	}]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn product_without_description_deserializes_to_none() {
		let product: Product = serde_json::from_str(
			r#"{"id": 1, "name": "Duplicate Laptop", "price": 999.99, "category": "Electronics", "stock": 1}"#
		).unwrap();
		assert_eq!(product.description, None);
	}

	#[test]
	fn order_requires_line_item_shape() {
		let result = serde_json::from_str::<Order>(
			r#"{"id": 1, "user_id": 1, "products": [{"product_id": "x"}], "total_amount": 1.0, "status": "pending"}"#
		);
		assert!(result.is_err());
	}

	#[test]
	fn seed_data_matches_startup_catalog() {
		let products = seed_products();
		assert_eq!(products.len(), 3);
		assert_eq!(products[0].name, "Laptop");
		assert_eq!(seed_users()[0].email, "user@example.com");
	}

	#[test]
	fn line_item_keeps_unknown_keys() {
		let raw = serde_json::json!({ "product_id": 1, "quantity": 2, "note": "gift" });
		let item: LineItem = serde_json::from_value(raw.clone()).unwrap();
		assert_eq!(item.product_id, 1);
		assert_eq!(item.extra.get("note"), Some(&Value::from("gift")));
		assert_eq!(serde_json::to_value(&item).unwrap(), raw);
	}
}
