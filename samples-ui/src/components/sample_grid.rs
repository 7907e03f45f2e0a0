//! Grid of sample cards - pure rendering

use dioxus::prelude::*;
use samples_common::SampleItem;

#[component]
pub fn SampleGridView(items: Vec<SampleItem>) -> Element {
    if items.is_empty() {
        return rsx! {
            div { class: "samples-empty",
                p { "No samples match the selected filters." }
            }
        };
    }

    rsx! {
        div { class: "samples-grid",
            for item in items {
                SampleCard { key: "{item.id}", item }
            }
        }
    }
}

#[component]
fn SampleCard(item: SampleItem) -> Element {
    let tags = card_tags(&item);

    rsx! {
        article { class: "sample-card",
            if let Some(url) = item.url.clone() {
                a { class: "sample-card-title", href: "{url}", "{item.title}" }
            } else {
                span { class: "sample-card-title", "{item.title}" }
            }
            p { class: "sample-card-description", "{item.description}" }
            div { class: "sample-card-tags",
                for tag in tags {
                    span { key: "{tag}", class: "sample-card-tag", "{tag}" }
                }
            }
        }
    }
}

/// Tags shown on a card: languages, then domains, level and content type
fn card_tags(item: &SampleItem) -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    tags.extend(item.languages.iter().copied());
    tags.extend(item.domains.iter().copied());
    tags.push(item.level);
    tags.push(item.content_type);
    tags.retain(|t| !t.is_empty());
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_tags_skip_empty_values() {
        let item = SampleItem {
            id: "s".into(),
            title: "S".into(),
            languages: vec!["Rust", "Motoko"],
            domains: vec!["DeFi"],
            level: "Advanced",
            content_type: "",
            ..Default::default()
        };
        assert_eq!(card_tags(&item), vec!["Rust", "Motoko", "DeFi", "Advanced"]);
    }
}
