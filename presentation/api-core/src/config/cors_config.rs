use poem::middleware::Cors;

/// Preflight responses are cached by browsers for one hour.
pub const PREFLIGHT_MAX_AGE_SECS: i32 = 3600;

/// Initialize CORS middleware for cross-origin requests
///
/// - Origins: exactly those in `ALLOW_ORIGINS`; none when it is empty
/// - Methods: the verb set declared by the service
/// - Headers: any
/// - Credentials: enabled
pub fn init_cors(allowed_origins: &[String], allowed_methods: &[&str]) -> Cors {
    let cors = Cors::new()
        .allow_methods(allowed_methods.iter().copied())
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE_SECS);

    // An empty origin list means "any origin" to poem.
    if allowed_origins.is_empty() {
        return cors.allow_origins_fn(|_| false);
    }
    cors.allow_origins(allowed_origins.iter().map(String::as_str))
}

/// Splits the comma-separated `ALLOW_ORIGINS` value.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_origins() {
        let origins = parse_origins(" https://example.org/ ,https://admin.example.org,, ");

        assert_eq!(
            origins,
            vec![
                "https://example.org".to_string(),
                "https://admin.example.org".to_string()
            ]
        );
    }

    #[test]
    fn should_yield_no_origin_for_blank_value() {
        assert!(parse_origins("  ").is_empty());
    }
}
