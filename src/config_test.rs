use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_lock`].
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var("FIELDBOOK_API_URL");
        std::env::remove_var("FIELDBOOK_REQUEST_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_lock();
    unsafe { clear_api_env() };
    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_env_reads_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_api_env();
        std::env::set_var("FIELDBOOK_API_URL", "https://fields.example.test/");
        std::env::set_var("FIELDBOOK_REQUEST_TIMEOUT_SECS", "7");
    }
    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://fields.example.test");
    assert_eq!(cfg.request_timeout_secs, 7);
    unsafe { clear_api_env() };
}

#[test]
fn from_env_rejects_zero_timeout() {
    let _guard = env_lock();
    unsafe {
        clear_api_env();
        std::env::set_var("FIELDBOOK_REQUEST_TIMEOUT_SECS", "0");
    }
    let err = ApiConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { var: "FIELDBOOK_REQUEST_TIMEOUT_SECS", .. }));
    unsafe { clear_api_env() };
}

#[test]
fn with_base_url_rejects_non_http() {
    assert!(matches!(ApiConfig::with_base_url("ftp://x"), Err(ConfigError::InvalidBaseUrl(_))));
    assert!(matches!(ApiConfig::with_base_url("https://"), Err(ConfigError::InvalidBaseUrl(_))));
    assert!(matches!(ApiConfig::with_base_url(""), Err(ConfigError::InvalidBaseUrl(_))));
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::with_base_url("http://localhost:5000///").unwrap();
    assert_eq!(cfg.endpoint("/api/Auth/login"), "http://localhost:5000/api/Auth/login");
    assert_eq!(cfg.endpoint("api/Auth/login"), "http://localhost:5000/api/Auth/login");
}
