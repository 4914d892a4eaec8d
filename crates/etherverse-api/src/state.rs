//! Application state wiring services together.
//!
//! Services in `etherverse-core` are generic over port traits; AppState pins
//! them to the reqwest implementations from `etherverse-infra`.

use std::sync::Arc;

use etherverse_core::ask::AskService;
use etherverse_infra::catalog::HttpCatalogSource;
use etherverse_infra::upstream::HttpAskUpstream;
use etherverse_types::config::EtherverseConfig;

pub type ConcreteAskService = AskService<HttpAskUpstream>;

/// Shared, read-only state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub ask_service: Arc<ConcreteAskService>,
    pub catalog_source: Arc<HttpCatalogSource>,
}

impl AppState {
    pub fn from_config(config: &EtherverseConfig) -> anyhow::Result<Self> {
        let upstream = HttpAskUpstream::new(&config.upstream)?;
        let ask_service = AskService::from_config(upstream, &config.upstream);
        let catalog_source = HttpCatalogSource::new(&config.catalog)?;

        Ok(Self {
            ask_service: Arc::new(ask_service),
            catalog_source: Arc::new(catalog_source),
        })
    }
}
