use anyhow::Result;

use crate::{Resource, Store, User};

/// Checks a claimed username and password against the user records.
///
/// Comparison is an exact plaintext match on both fields, scanning the users
/// resource in order.
///
/// # Errors
///
/// Returns any error from loading the users resource.
pub fn authenticate(store: &Store, username: &str, password: &str) -> Result<bool> {
    let users: Vec<User> = store.load(Resource::Users)?;
    Ok(users
        .iter()
        .any(|user| user.username == username && user.password == password))
}
