use std::future::Future;

use etherverse_types::catalog::Category;
use etherverse_types::error::CatalogError;

use crate::catalog::parser::parse_catalog;

/// Where the curated-list markdown comes from. Uses RPITIT for async methods.
pub trait CatalogSource: Send + Sync {
    /// Fetch the whole markdown document.
    fn fetch_markdown(&self) -> impl Future<Output = Result<String, CatalogError>> + Send;

    /// Human-readable location for logging.
    fn location(&self) -> &str;
}

/// Fetch and parse the curated list in a single pass.
pub async fn load_catalog<S: CatalogSource>(source: &S) -> Result<Vec<Category>, CatalogError> {
    let markdown = source.fetch_markdown().await?;
    let categories = parse_catalog(&markdown);
    tracing::debug!(
        source = %source.location(),
        bytes = markdown.len(),
        categories = categories.len(),
        "Curated list loaded"
    );
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(Result<&'static str, u16>);

    impl CatalogSource for StaticSource {
        async fn fetch_markdown(&self) -> Result<String, CatalogError> {
            self.0.map(str::to_string).map_err(CatalogError::Status)
        }

        fn location(&self) -> &str {
            "static"
        }
    }

    #[tokio::test]
    async fn load_catalog_parses_fetched_document() {
        let source = StaticSource(Ok("## Staking\n- [Lido](https://lido.fi) - Liquid staking.\n"));
        let categories = load_catalog(&source).await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].resources[0].description, "Liquid staking");
    }

    #[tokio::test]
    async fn load_catalog_propagates_fetch_errors() {
        let source = StaticSource(Err(404));
        assert!(matches!(
            load_catalog(&source).await,
            Err(CatalogError::Status(404))
        ));
    }
}
