use poem::Route;
use poem_openapi::{OpenApi, OpenApiService};

/// Swagger UI at `/docs` and `/docs/index`, OpenAPI document at `/docs/openapi.json`.
pub fn docs_route<T: OpenApi + 'static>(service: &OpenApiService<T, ()>) -> Route {
    Route::new()
        .at("/openapi.json", service.spec_endpoint())
        .nest("/index", service.swagger_ui())
        .nest("/", service.swagger_ui())
}
