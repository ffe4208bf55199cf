use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_types::SdkConfig;

/// Load the shared AWS config from the SDK's default credential and region chains.
pub async fn configure_aws() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider();

    aws_config::defaults(BehaviorVersion::v2024_03_28())
        .region(region_provider)
        .load()
        .await
}
