#![allow(dead_code)]

use serde_json::Value;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file_name)
}

fn read_json_array(file_name: &str) -> Vec<Value> {
    let path = data_path(file_name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    match serde_json::from_str(&content) {
        Ok(Value::Array(items)) => items,
        other => panic!("{} must hold a JSON array, got {:?}", path.display(), other),
    }
}

/// Load `<base>.json` payloads paired with the expected `<base>_readable.json`
/// outputs. Payloads are returned as JSON text, ready for the pipeline.
pub fn load_data_results(base: &str) -> Vec<(String, Value)> {
    let data = read_json_array(&format!("{}.json", base));
    let results = read_json_array(&format!("{}_readable.json", base));
    assert_eq!(data.len(), results.len(), "{}: data and results differ in length", base);

    data.into_iter()
        .map(|payload| payload.to_string())
        .zip(results)
        .collect()
}

/// Load `errors.json`: payloads paired with the expected error code.
pub fn load_error_cases() -> Vec<(String, String)> {
    read_json_array("errors.json")
        .into_iter()
        .map(|case| {
            let code = case["code"].as_str().expect("case without code").to_string();
            (case["payload"].to_string(), code)
        })
        .collect()
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
