use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, HostConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, HostConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = HostConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6() {
    let cfg = HostConfig::from_vars(Some("::1"), Some("3000")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_vars_rejects_bad_port() {
    assert_eq!(
        HostConfig::from_vars(None, Some("http")),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(
        HostConfig::from_vars(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn from_vars_rejects_hostname() {
    assert_eq!(
        HostConfig::from_vars(Some("localhost"), None),
        Err(ConfigError::InvalidHost("localhost".to_owned()))
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".to_owned()).to_string(), "invalid PORT 'x': expected 0-65535");
}
