use super::*;

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn endpoint_joins_below_api_root() {
    let client = test_client("https://staging.opensupplyhub.org/api");
    let url = client.endpoint(LOCATIONS_PATH).unwrap();
    assert_eq!(
        url.as_str(),
        "https://staging.opensupplyhub.org/api/v1/production-locations/"
    );
}

#[test]
fn endpoint_strips_trailing_slash() {
    let client = test_client("https://opensupplyhub.org/api//");
    let url = client.endpoint(PARENT_COMPANIES_PATH).unwrap();
    assert_eq!(
        url.as_str(),
        "https://opensupplyhub.org/api/v1/parent-companies/"
    );
}

#[test]
fn auth_header_uses_token_scheme() {
    let client = test_client("https://opensupplyhub.org/api");
    assert_eq!(client.auth_header(), "Token test-key");
}

#[test]
fn blank_api_key_is_rejected_for_named_environment() {
    let result = RegistryClient::new(Environment::Production, "   ", 30);
    assert!(matches!(
        result,
        Err(RegistryError::MissingApiKey {
            environment: Environment::Production
        })
    ));
}

#[test]
fn missing_api_key_message_names_environment() {
    let err = RegistryError::MissingApiKey {
        environment: Environment::Staging,
    };
    assert_eq!(err.to_string(), "Please save your API key for STAGING first");
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = RegistryClient::with_base_url("k", 30, "not a url");
    assert!(matches!(result, Err(RegistryError::InvalidUrl { .. })));
}
