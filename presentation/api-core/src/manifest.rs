/// Static description of a service: OpenAPI title/version and the verbs its
/// CORS policy admits.
#[derive(Debug, Clone, Copy)]
pub struct ServiceManifest {
    pub title: &'static str,
    pub version: &'static str,
    pub allowed_methods: &'static [&'static str],
}
