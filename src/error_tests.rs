//! Tests for the error taxonomy

use super::*;

#[test]
fn test_unauthorized_classification() {
    let unauthorized = AiError::Api {
        code: 401,
        message: "invalid key".to_string(),
    };
    let forbidden = AiError::Api {
        code: 403,
        message: "forbidden".to_string(),
    };

    assert_eq!(unauthorized.fault(), Some(Fault::Unauthorized));
    assert_eq!(forbidden.fault(), Some(Fault::Unauthorized));
}

#[test]
fn test_rate_limit_classification() {
    let error = AiError::Api {
        code: 429,
        message: "slow down".to_string(),
    };

    assert_eq!(error.fault(), Some(Fault::RateLimited));
}

#[test]
fn test_server_fault_classification() {
    let server = AiError::Api {
        code: 500,
        message: "boom".to_string(),
    };
    let bad_request = AiError::Api {
        code: 400,
        message: "bad request".to_string(),
    };

    assert_eq!(server.fault(), Some(Fault::ServerFault));
    assert_eq!(bad_request.fault(), Some(Fault::ServerFault));
}

#[test]
fn test_network_fault_classification() {
    let error = AiError::Network("connection refused".to_string());

    assert_eq!(error.fault(), Some(Fault::NetworkFault));
}

#[test]
fn test_non_service_errors_have_no_fault() {
    assert_eq!(AiError::NotConfigured("no key".to_string()).fault(), None);
    assert_eq!(AiError::Parse("bad json".to_string()).fault(), None);
    assert_eq!(AiError::Cancelled.fault(), None);
}

#[test]
fn test_error_display() {
    let error = AiError::Api {
        code: 429,
        message: "rate limit exceeded".to_string(),
    };

    assert_eq!(error.to_string(), "API error (429): rate limit exceeded");
}

#[test]
fn test_config_error_from_toml() {
    let result: Result<crate::config::Config, _> = toml::from_str("api = 42");
    let error = ConfigError::from(result.unwrap_err());

    assert!(error.to_string().starts_with("Invalid config file"));
}
