//! Domain Layer
//!
//! Entities the server stores and the rules it applies to incoming wishes.

mod entity;

use chrono::Utc;
use wishlist_core::Wish;

pub use entity::{Entity, StoreError, StoreResult};

impl Entity for Wish {
    type Id = String;
}

/// Id for a wish created without one: `{owner}-{title}` with spaces turned
/// into dashes, lowercased, suffixed with the current Unix time in nanoseconds.
pub fn generate_wish_id(owner: &str, title: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    wish_id_at(owner, title, nanos)
}

fn wish_id_at(owner: &str, title: &str, nanos: i64) -> String {
    let joined = format!("{owner}-{title}");
    let mut base = joined.trim().replace(' ', "-");
    if base.is_empty() || base == "-" {
        base = "wish".to_string();
    }
    format!("{}-{}", base.to_lowercase(), nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wish_id_from_owner_and_title() {
        assert_eq!(
            wish_id_at("lena", "Lego Set Deluxe", 42),
            "lena-lego-set-deluxe-42"
        );
    }

    #[test]
    fn test_wish_id_fallback_base() {
        assert_eq!(wish_id_at("", "", 7), "wish-7");
    }

    #[test]
    fn test_generated_ids_carry_timestamp() {
        let id = generate_wish_id("zoe", "Buch");
        let suffix = id.strip_prefix("zoe-buch-").unwrap();
        assert!(suffix.parse::<i64>().unwrap() > 0);
    }
}
