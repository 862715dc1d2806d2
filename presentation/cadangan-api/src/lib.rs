//! Community suggestions submitted to each tenant mosque's committee.

use api_core::ServiceManifest;

pub mod api {
    pub mod cadangan {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod error;
    pub mod tags;
}
pub mod setup {
    pub mod dependency_injection;
}

/// POST stays routable for same-origin and non-browser clients; cross-origin
/// browsers may only read and follow up.
pub const MANIFEST: ServiceManifest = ServiceManifest {
    title: "Cadangan API",
    version: env!("CARGO_PKG_VERSION"),
    allowed_methods: &["PUT", "GET", "DELETE"],
};
