use api_core::setup::bootstrap::Platform;
use tabung_api::MANIFEST;
use tabung_api::setup::dependency_injection::DependencyContainer;

/// Tabung API entry point.
///
/// Resolves the environment, wires the fund family over the tenant pools and
/// serves it behind the shared middleware chain.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let platform = Platform::init().await?;

    let container = DependencyContainer::from_pools(platform.pools.clone());

    platform.serve(MANIFEST, container.into_api()).await
}
