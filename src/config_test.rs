use std::sync::Mutex;

use super::*;

/// Serializes tests that touch the shared server env vars.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 5] = ["HOST", "PORT", "STATIC_DIR", "API_UPSTREAM_URL", "PROXY_TIMEOUT_SECS"];

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_server_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    assert!(cfg.api_upstream.is_none());
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:5000");
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("STATIC_DIR", "client/dist");
        std::env::set_var("API_UPSTREAM_URL", "http://backend:3001/");
        std::env::set_var("PROXY_TIMEOUT_SECS", "5");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.index_html(), PathBuf::from("client/dist/index.html"));
    assert_eq!(cfg.api_upstream.as_deref(), Some("http://backend:3001"));
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"), "{err}");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_blank_values_use_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "  ");
        std::env::set_var("API_UPSTREAM_URL", "");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.api_upstream.is_none());

    unsafe { clear_server_env() };
}
