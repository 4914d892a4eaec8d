//! Line-oriented parser for the curated-list markdown.
//!
//! The document is a flat awesome-list: `## Heading` lines open a category and
//! `- [Name](url) - Description` bullets add resources to it. Anything else is
//! ignored.

use std::sync::LazyLock;

use etherverse_types::catalog::{Category, Resource};
use regex::Regex;

/// `- [name](url) - description`, name and url matched lazily.
static RESOURCE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"- \[(.*?)\]\((.*?)\) - (.*)").expect("resource pattern is valid")
});

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

const HEADING_PREFIX: &str = "## ";
const RESOURCE_PREFIX: &str = "- [";

/// Sections that describe the list itself rather than resources.
const META_SECTIONS: [&str; 2] = ["Contribute", "Contact"];

/// Split a curated-list document into categories.
///
/// - A `## ` line not containing `Contents` opens a category; the previous
///   one is kept only if it gained at least one resource.
/// - Bullet lines before the first heading are dropped.
/// - One trailing `.` is stripped from each description.
/// - `Contribute` and `Contact` sections are removed.
pub fn parse_catalog(markdown: &str) -> Vec<Category> {
    let mut categories = Vec::new();
    let mut current: Option<Category> = None;

    for line in markdown.lines() {
        if line.starts_with(HEADING_PREFIX) && !line.contains("Contents") {
            if let Some(done) = current.take().filter(|c| !c.resources.is_empty()) {
                categories.push(done);
            }
            let title = line[HEADING_PREFIX.len()..].trim();
            current = Some(Category::new(title, slugify(title)));
        }

        if line.starts_with(RESOURCE_PREFIX) {
            if let (Some(category), Some(resource)) = (current.as_mut(), parse_resource(line)) {
                category.resources.push(resource);
            }
        }
    }

    if let Some(done) = current.filter(|c| !c.resources.is_empty()) {
        categories.push(done);
    }

    categories
        .into_iter()
        .filter(|c| !META_SECTIONS.contains(&c.title.as_str()))
        .collect()
}

/// Anchor id for a heading: lowercase, with every run outside `[a-z0-9]`
/// collapsed to a single `-`.
pub fn slugify(title: &str) -> String {
    NON_SLUG_RUN
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

fn parse_resource(line: &str) -> Option<Resource> {
    let caps = RESOURCE_LINE.captures(line)?;
    let description = &caps[3];
    Some(Resource {
        name: caps[1].to_string(),
        url: caps[2].to_string(),
        description: description.strip_suffix('.').unwrap_or(description).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_headings_with_one_bullet_each() {
        let md = "\
# Awesome Ethereum

## Wallets

- [Rabby](https://rabby.io) - Browser wallet for EVM chains.

## Developer Tools

- [Foundry](https://getfoundry.sh) - Fast toolkit for Ethereum development
";
        let categories = parse_catalog(md);
        assert_eq!(categories.len(), 2);

        assert_eq!(categories[0].title, "Wallets");
        assert_eq!(categories[0].slug, "wallets");
        assert_eq!(
            categories[0].resources,
            vec![Resource {
                name: "Rabby".to_string(),
                url: "https://rabby.io".to_string(),
                description: "Browser wallet for EVM chains".to_string(),
            }]
        );

        assert_eq!(categories[1].title, "Developer Tools");
        assert_eq!(categories[1].slug, "developer-tools");
        assert_eq!(categories[1].resources[0].name, "Foundry");
        assert_eq!(categories[1].resources[0].url, "https://getfoundry.sh");
        assert_eq!(
            categories[1].resources[0].description,
            "Fast toolkit for Ethereum development"
        );
    }

    #[test]
    fn contents_heading_is_not_a_category() {
        let md = "\
## Contents

- [Wallets](#wallets) - Jump to wallets

## Wallets

- [Frame](https://frame.sh) - Desktop wallet
";
        let categories = parse_catalog(md);
        // The bullet under Contents lands in no category.
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Wallets");
        assert_eq!(categories[0].resources.len(), 1);
    }

    #[test]
    fn empty_categories_are_dropped() {
        let md = "\
## Empty

Some prose without bullets.

## Clients

- [Geth](https://geth.ethereum.org) - Go execution client
";
        let categories = parse_catalog(md);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Clients");
    }

    #[test]
    fn meta_sections_are_removed() {
        let md = "\
## Clients

- [Reth](https://reth.rs) - Rust execution client

## Contribute

- [Guidelines](https://example.org/contributing) - How to add a link

## Contact

- [Element](https://matrix.to/#/w3hc) - Chat with us
";
        let titles: Vec<String> = parse_catalog(md).into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Clients".to_string()]);
    }

    #[test]
    fn malformed_bullets_and_orphans_are_ignored() {
        let md = "\
- [Orphan](https://orphan.example) - Before any heading

## Tools

- [No description](https://nodesc.example)
- [Good](https://good.example) - Works
* [Star bullet](https://star.example) - Wrong marker
";
        let categories = parse_catalog(md);
        assert_eq!(categories.len(), 1);
        let names: Vec<&str> = categories[0].resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Good"]);
    }

    #[test]
    fn only_one_trailing_period_is_stripped() {
        let md = "## Misc\n- [Dots](https://dots.example) - Wait for it...\n";
        let categories = parse_catalog(md);
        assert_eq!(categories[0].resources[0].description, "Wait for it..");
    }

    #[test]
    fn crlf_line_endings() {
        let md = "## Layer 2\r\n- [Optimism](https://optimism.io) - Optimistic rollup.\r\n";
        let categories = parse_catalog(md);
        assert_eq!(categories[0].title, "Layer 2");
        assert_eq!(categories[0].resources[0].description, "Optimistic rollup");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("Layer 2"), "layer-2");
        assert_eq!(slugify("Tools & Libraries"), "tools-libraries");
        assert_eq!(slugify("Books / Courses!"), "books-courses-");
        assert_eq!(slugify("EIP-7702"), "eip-7702");
    }
}
