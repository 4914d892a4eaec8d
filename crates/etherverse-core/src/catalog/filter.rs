//! Search over parsed categories.

use etherverse_types::catalog::Category;
use serde::Serialize;

/// Keep resources whose name or description contains `term`, ignoring case.
///
/// An empty term returns every category unchanged. Categories left without
/// resources are dropped.
pub fn filter_catalog(categories: &[Category], term: &str) -> Vec<Category> {
    if term.is_empty() {
        return categories.to_vec();
    }

    let needle = term.to_lowercase();
    categories
        .iter()
        .filter_map(|category| {
            let resources: Vec<_> = category
                .resources
                .iter()
                .filter(|r| {
                    r.name.to_lowercase().contains(&needle)
                        || r.description.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            if resources.is_empty() {
                None
            } else {
                Some(Category {
                    resources,
                    ..category.clone()
                })
            }
        })
        .collect()
}

/// What a curated-list screen should show after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogView {
    Categories { categories: Vec<Category> },
    NoResults { term: String },
}

impl CatalogView {
    pub fn from_filtered(term: &str, categories: Vec<Category>) -> Self {
        if categories.is_empty() {
            CatalogView::NoResults {
                term: term.to_string(),
            }
        } else {
            CatalogView::Categories { categories }
        }
    }

    /// Filter and classify in one call.
    pub fn search(categories: &[Category], term: &str) -> Self {
        Self::from_filtered(term, filter_catalog(categories, term))
    }

    /// Total resources across visible categories.
    pub fn resource_count(&self) -> usize {
        match self {
            CatalogView::Categories { categories } => {
                categories.iter().map(|c| c.resources.len()).sum()
            }
            CatalogView::NoResults { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use etherverse_types::catalog::Resource;

    use super::*;

    fn resource(name: &str, description: &str) -> Resource {
        Resource {
            name: name.to_string(),
            url: format!("https://{}.example", name.to_lowercase()),
            description: description.to_string(),
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            Category {
                title: "Wallets".to_string(),
                slug: "wallets".to_string(),
                resources: vec![
                    resource("Rabby", "Browser wallet for EVM chains"),
                    resource("Frame", "Desktop wallet"),
                ],
            },
            Category {
                title: "Clients".to_string(),
                slug: "clients".to_string(),
                resources: vec![resource("Reth", "Rust execution client")],
            },
        ]
    }

    #[test]
    fn empty_term_returns_everything() {
        assert_eq!(filter_catalog(&sample(), ""), sample());
    }

    #[test]
    fn matches_name_or_description_case_insensitively() {
        let filtered = filter_catalog(&sample(), "RUST");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Clients");

        let filtered = filter_catalog(&sample(), "frame");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].resources.len(), 1);
        assert_eq!(filtered[0].resources[0].name, "Frame");
    }

    #[test]
    fn url_is_not_searched() {
        assert!(filter_catalog(&sample(), "https").is_empty());
    }

    #[test]
    fn no_match_yields_no_results_view() {
        let view = CatalogView::search(&sample(), "solana");
        assert_eq!(
            view,
            CatalogView::NoResults {
                term: "solana".to_string()
            }
        );
        assert_eq!(view.resource_count(), 0);
    }

    #[test]
    fn matching_view_counts_resources() {
        let view = CatalogView::search(&sample(), "wallet");
        assert!(matches!(view, CatalogView::Categories { ref categories } if categories.len() == 1));
        assert_eq!(view.resource_count(), 2);
    }
}
