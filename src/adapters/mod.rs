// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod memory;

#[cfg(feature = "lambda")]
pub mod dynamodb;
#[cfg(feature = "lambda")]
pub mod ses;

/// Loads the shared AWS configuration, optionally pinning the region.
#[cfg(feature = "lambda")]
pub async fn load_aws_config(region: Option<&str>) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(aws_sdk_dynamodb::config::Region::new(region.to_string()));
    }
    loader.load().await
}
