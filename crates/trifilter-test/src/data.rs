//! Sample collections.

use std::collections::HashMap;

/// The sequence `1..=5`.
pub fn numbers() -> Vec<i32> {
    (1..=5).collect()
}

/// `{a: 1, B: 20, c: 3}`: two lowercase keys and one uppercase key.
pub fn mixed_case_map() -> HashMap<String, i32> {
    HashMap::from([
        ("a".to_string(), 1),
        ("B".to_string(), 20),
        ("c".to_string(), 3),
    ])
}

/// Returns true when the key has no uppercase character.
#[allow(clippy::ptr_arg)]
pub fn is_lowercase(key: &String) -> bool {
    !key.chars().any(char::is_uppercase)
}
