use unigate::config;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://portal.example.com/"),
        "https://portal.example.com"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://portal.example.com"),
        "https://portal.example.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://portal.example.com///"),
        "https://portal.example.com"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://portal.example.com/  "),
        "https://portal.example.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:8080");
}

#[test]
fn test_sanitize_base_url_whitespace_only() {
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:8080");
}

#[test]
fn test_slot_names_match_original_storage_keys() {
    assert_eq!(config::USERS_SLOT, "app_users");
    assert_eq!(config::SESSION_SLOT, "current_user");
}

#[test]
fn test_default_admin_credentials() {
    assert_eq!(config::DEFAULT_ADMIN_USERNAME, "admin");
    assert_eq!(config::DEFAULT_ADMIN_PASSWORD, "admin123");
}
