//! Inference integration tests.
//!
//! Fixtures live in `tests/test-cases/reason` and hold a serialized model
//! together with the expected output for a list of examples. Expected values
//! were computed independently of this crate.

mod ftrl;
mod hoeffding;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use reason::Value;
use serde::de::DeserializeOwned;

pub const TEST_CASES_DIR: &str = "tests/test-cases/reason";

/// An example as stored in the fixtures.
pub type JsonExample = HashMap<String, Value>;

pub fn load_fixture<T: DeserializeOwned>(group: &str, name: &str) -> T {
    let path = Path::new(TEST_CASES_DIR).join(group).join(format!("{name}.json"));
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}
