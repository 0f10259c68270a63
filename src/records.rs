use serde::{Deserialize, Serialize};

use crate::Lkr;

/// One row of the `users` resource.
///
/// Passwords are stored and compared in plain text, matching the file format
/// this tool inherits. Hashing them is a known upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// One row of the `branches` resource.
///
/// Branch IDs are opaque text tokens. Nothing enforces their uniqueness:
/// analyses must tolerate two branches sharing an ID.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Branch {
    #[serde(rename = "Branch ID")]
    pub branch_id: String,
    #[serde(rename = "Branch Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
}

/// One row of the `products` resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Product Name")]
    pub name: String,
}

/// One row of the `sales` resource.
///
/// `branch_id` and `product_id` are not foreign keys; a sale may refer to a
/// branch or product that no other resource knows about. The date stays as
/// text until an analysis needs it as a calendar day (see
/// [`parse_date`](crate::parse_date)).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sale {
    #[serde(rename = "Branch ID")]
    pub branch_id: String,
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Amount Sold")]
    pub amount: Lkr,
    #[serde(rename = "Date")]
    pub date: String,
}
