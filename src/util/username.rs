//! Placeholder username suggestions for the "new user" form.
//!
//! Suggestions are cosmetic: not unique, not checked against existing users,
//! and not drawn from a cryptographic RNG.

#[cfg(test)]
#[path = "username_test.rs"]
mod username_test;

use rand::Rng;

use crate::config::UiConfig;
use crate::platform::{Document, Element};

pub const PREFIXES: [&str; 14] = [
    "user", "vpn", "net", "acc", "vip", "pro", "fast", "max", "turbo", "sub", "bot", "go", "top", "plus",
];
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub const SUFFIX_LEN: usize = 5;

/// `<prefix>_<suffix>` with a uniform prefix and a uniform `[a-z0-9]` suffix.
pub fn random_username<R: Rng>(rng: &mut R) -> String {
    let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}_{suffix}")
}

/// Generate a username and write it into the username input when present.
pub fn generate_username<D: Document, R: Rng>(doc: &D, config: &UiConfig, rng: &mut R) -> String {
    let name = random_username(rng);
    match doc.element_by_id(&config.elements.username_input) {
        Some(input) => input.set_value(&name),
        None => log::debug!("username input #{} not on page", config.elements.username_input),
    }
    name
}
