//! `etherverse awesome` - browse the Awesome Ethereum list from the terminal.

use console::style;

use etherverse_core::catalog::{CatalogView, load_catalog};
use etherverse_infra::catalog::HttpCatalogSource;
use etherverse_types::config::EtherverseConfig;

use crate::http::error::CATALOG_UNAVAILABLE;

/// Fetch, parse, and filter the curated list, then print it.
pub async fn show_awesome(config: &EtherverseConfig, search: &str, json: bool) -> anyhow::Result<()> {
    let source = HttpCatalogSource::new(&config.catalog)?;

    let spinner = super::spinner("Loading resources...");
    let loaded = load_catalog(&source).await;
    spinner.finish_and_clear();

    let categories = match loaded {
        Ok(categories) => categories,
        Err(e) => {
            eprintln!("\n  {} {CATALOG_UNAVAILABLE}", style("!").red().bold());
            eprintln!("  {}\n", style(&e).dim());
            return Err(e.into());
        }
    };

    let view = CatalogView::search(&categories, search);

    if json {
        let total = view.resource_count();
        let mut value = serde_json::to_value(&view)?;
        value["total"] = serde_json::json!(total);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_view(&view);
    Ok(())
}

fn print_view(view: &CatalogView) {
    match view {
        CatalogView::NoResults { term } => {
            println!();
            println!(
                "  {} No resources found matching \"{}\"",
                style("?").yellow().bold(),
                style(term).yellow()
            );
            println!();
        }
        CatalogView::Categories { categories } => {
            println!();
            for category in categories {
                println!(
                    "  {} {}",
                    style(&category.title).cyan().bold(),
                    style(format!("({})", category.resources.len())).dim()
                );
                for resource in &category.resources {
                    println!(
                        "    {} {} {}",
                        style("*").green(),
                        style(&resource.name).bold(),
                        style(&resource.url).dim().underlined()
                    );
                    if !resource.description.is_empty() {
                        println!("      {}", resource.description);
                    }
                }
                println!();
            }
            println!(
                "  {}",
                style(format!("{} resources", view.resource_count())).dim()
            );
            println!();
        }
    }
}
