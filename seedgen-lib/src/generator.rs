use crate::types::*;
use tracing::debug;

pub const ORDERS_PER_USER: u32 = 50;

/// `(id, name, email)` for every generated user, in output order.
pub const SEED_USERS: [(u32, &str, &str); 2] = [
    (1, "Alice", "alice@example.com"),
    (2, "Bob", "bob@example.com"),
];

const BASE_AMOUNT: f64 = 10.0;
const AMOUNT_STEP: f64 = 0.5;
const USER_SURCHARGE: f64 = 1.1;

/// Builds the fixed dataset. Output is identical on every call.
pub fn generate_dataset() -> Dataset {
    let users = SEED_USERS
        .iter()
        .map(|&(id, name, email)| generate_user(id, name, email))
        .collect();

    Dataset { users }
}

pub fn generate_user(id: u32, name: &str, email: &str) -> User {
    let orders: Vec<Order> = (1..=ORDERS_PER_USER)
        .map(|sequence| generate_order(id, sequence))
        .collect();

    debug!(user_id = id, orders = orders.len(), "generated user");

    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        orders,
    }
}

/// Order number `sequence` (1-based) of user `user_id`.
pub fn generate_order(user_id: u32, sequence: u32) -> Order {
    Order {
        order_id: base_order_id(user_id) + sequence,
        product: product_name(sequence),
        amount: order_amount(user_id, sequence),
        status: Status::from(sequence),
    }
}

pub fn base_order_id(user_id: u32) -> u32 {
    user_id * 100
}

pub fn product_name(sequence: u32) -> String {
    format!(
        "High Quality and Durable Product Model Number {:03} for Everyday Use",
        sequence
    )
}

pub fn order_amount(user_id: u32, sequence: u32) -> f64 {
    let raw = BASE_AMOUNT + sequence as f64 * AMOUNT_STEP + user_id as f64 * USER_SURCHARGE;
    round_to_cents(raw)
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
