/// Token validation settings for the production auth gate.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// JWKS document holding the RS256 signing keys.
    pub jwks_url: Option<String>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}
