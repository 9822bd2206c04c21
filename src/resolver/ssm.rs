//! AWS SSM Parameter Store resolver.
//!
//! Wraps the async AWS SDK behind the synchronous [`ParameterResolver`]
//! trait. The client owns a current-thread tokio runtime and blocks on each
//! request, so callers never deal with async code.
//!
//! All reads request decryption, so `SecureString` parameters come back as
//! plain text. Values are cached for the lifetime of the client.

use super::{ParameterCache, ParameterResolver, ResolveError};
use crate::error::{EnvgenError, Result};
use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use std::collections::HashMap;
use tokio::runtime::Runtime;

/// SSM Parameter Store client with an in-memory value cache.
pub struct SsmClient {
    runtime: Runtime,
    client: aws_sdk_ssm::Client,
    cache: ParameterCache,
}

impl SsmClient {
    /// Create a client using the AWS default configuration chain.
    ///
    /// When `region` is given it overrides `AWS_REGION` and the profile
    /// region.
    pub fn new(region: Option<&str>) -> Result<Self> {
        let runtime = build_runtime()?;

        let config = runtime.block_on(load_config(region.map(str::to_string)));
        if config.region().is_none() {
            return Err(EnvgenError::StoreError(
                "no AWS region configured.\n\n\
                 Pass --region, set `region` in .envgen.yaml, or set AWS_REGION."
                    .to_string(),
            ));
        }
        tracing::debug!(region = ?config.region(), "loaded AWS configuration");

        let client = aws_sdk_ssm::Client::new(&config);
        Ok(Self::with_runtime(runtime, client))
    }

    fn with_runtime(runtime: Runtime, client: aws_sdk_ssm::Client) -> Self {
        Self {
            runtime,
            client,
            cache: ParameterCache::new(),
        }
    }

    /// Warm the cache with every parameter under each of `paths`.
    pub fn prefetch(&self, paths: &[String]) -> Result<()> {
        for path in paths {
            self.get_parameters_by_path(path)?;
        }
        Ok(())
    }

    /// Fetch every parameter under `path`, recursively, and cache them.
    ///
    /// A trailing `/` is appended when missing. Follows `next_token` until the
    /// store reports no more pages.
    pub fn get_parameters_by_path(&self, path: &str) -> Result<HashMap<String, String>> {
        let path = normalize_path_prefix(path);
        let mut parameters = HashMap::new();
        let mut next_token: Option<String> = None;

        loop {
            let request = self
                .client
                .get_parameters_by_path()
                .path(&path)
                .recursive(true)
                .with_decryption(true)
                .set_next_token(next_token.take());

            let page = self.runtime.block_on(request.send()).map_err(|e| {
                EnvgenError::PrefetchError {
                    path: path.clone(),
                    message: DisplayErrorContext(&e).to_string(),
                }
            })?;

            for parameter in page.parameters() {
                if let (Some(name), Some(value)) = (parameter.name(), parameter.value()) {
                    self.cache.insert(name, value);
                    parameters.insert(name.to_string(), value.to_string());
                }
            }

            match page.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        tracing::debug!(
            path = %path,
            count = parameters.len(),
            cached = self.cache.len(),
            "prefetched parameters"
        );
        Ok(parameters)
    }

    fn fetch_parameter(&self, name: &str) -> std::result::Result<String, ResolveError> {
        tracing::debug!(parameter = name, "fetching parameter from SSM");

        let request = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true);

        let output = self.runtime.block_on(request.send()).map_err(|e| {
            let not_found = e
                .as_service_error()
                .is_some_and(|service| service.is_parameter_not_found());
            if not_found {
                ResolveError::NotFound {
                    name: name.to_string(),
                }
            } else {
                ResolveError::Transport {
                    name: name.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                }
            }
        })?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| ResolveError::EmptyValue {
                name: name.to_string(),
            })
    }
}

impl ParameterResolver for SsmClient {
    fn get_parameter(&self, name: &str) -> std::result::Result<String, ResolveError> {
        self.cache
            .get_or_try_insert_with(name, || self.fetch_parameter(name))
    }
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| EnvgenError::StoreError(format!("failed to start async runtime: {}", e)))
}

async fn load_config(region: Option<String>) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    loader.load().await
}

fn normalize_path_prefix(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}
