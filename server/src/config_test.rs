use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_values(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parses_ipv6_bind_addr() {
    let cfg = ServerConfig::from_values(Some("9000"), Some("::1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:9000");
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_values(Some("http"), None).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", ref value } if value == "http"));
}

#[test]
fn rejects_out_of_range_port() {
    assert!(ServerConfig::from_values(Some("70000"), None).is_err());
}

#[test]
fn rejects_invalid_bind_addr() {
    let err = ServerConfig::from_values(None, Some("localhost")).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}
