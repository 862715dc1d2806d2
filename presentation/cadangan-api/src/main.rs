use api_core::setup::bootstrap::Platform;
use cadangan_api::MANIFEST;
use cadangan_api::setup::dependency_injection::DependencyContainer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let platform = Platform::init().await?;

    let container = DependencyContainer::from_pools(platform.pools.clone());

    platform.serve(MANIFEST, container.cadangan_api).await
}
