#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use echo_backend::config::{CONFIG_PATH_ENV, DEBUG_ENV, HOST_ENV, LOG_ENV, PORT_ENV};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable `ServerConfig::load` reads.
pub const CONFIG_VARS: [&str; 5] = [CONFIG_PATH_ENV, HOST_ENV, PORT_ENV, DEBUG_ENV, LOG_ENV];

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
///
/// Config variables not named in `changes` are cleared for the duration of
/// `f`, so a developer's shell cannot leak into the result.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut all: Vec<(&str, Option<&str>)> = CONFIG_VARS
        .iter()
        .filter(|var| !changes.iter().any(|(k, _)| k == *var))
        .map(|var| (*var, None))
        .collect();
    all.extend_from_slice(changes);

    let _guard = ScopedEnv::new(&all);
    f()
}

/// Writes `content` to a fresh temporary TOML file.
pub fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
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
