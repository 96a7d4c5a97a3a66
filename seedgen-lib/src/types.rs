use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Shipped,
    Processing,
    Delivered,
    Cancelled,
}

/// Rotation order used when assigning a status to the i-th order.
pub const STATUSES: [Status; 4] = [
    Status::Shipped,
    Status::Processing,
    Status::Delivered,
    Status::Cancelled,
];

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Shipped => "shipped",
            Status::Processing => "processing",
            Status::Delivered => "delivered",
            Status::Cancelled => "cancelled",
        }
    }
}

impl From<u32> for Status {
    fn from(sequence: u32) -> Self {
        STATUSES[sequence as usize % STATUSES.len()]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub product: String,
    pub amount: f64,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub orders: Vec<Order>,
}

/// Top-level document written to `users_orders.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
}

impl Dataset {
    pub fn order_count(&self) -> usize {
        self.users.iter().map(|user| user.orders.len()).sum()
    }

    pub fn total_amount(&self) -> f64 {
        let total: f64 = self
            .users
            .iter()
            .flat_map(|user| user.orders.iter())
            .map(|order| order.amount)
            .sum();
        crate::generator::round_to_cents(total)
    }
}

#[derive(Debug, Error)]
pub enum SeedGenError {
    #[error("Cannot resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
