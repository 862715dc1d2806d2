//! Funds, fund types and collection entries of every tenant mosque.

use api_core::ServiceManifest;

pub mod api {
    pub mod error;
    pub mod kutipan {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod tabung {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod tabung_type {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod tags;
}
pub mod setup {
    pub mod dependency_injection;
}

pub const MANIFEST: ServiceManifest = ServiceManifest {
    title: "Tabung API",
    version: env!("CARGO_PKG_VERSION"),
    allowed_methods: &["GET", "POST", "DELETE", "PUT"],
};
