use std::collections::BTreeSet;

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

use crate::domain::{
    candidate::{
        clean_candidate_name, logo_candidate_name, looks_like_company_name, LogoCandidate,
    },
    classification::{
        classify_container, classify_name, Classification, ContainerContext, WELL_KNOWN_INVESTORS,
        WELL_KNOWN_PARTNERS,
    },
    page_snapshot::PageSnapshot,
};

/// Class-attribute vocabulary that marks an element as a likely logo or name
/// grid. Matching is substring-based, so "partner-grid" and "partners" both
/// qualify.
const CONTAINER_CLASS_HINTS: [&str; 9] = [
    "logo",
    "partner",
    "investor",
    "backed",
    "portfolio",
    "supporter",
    "ecosystem",
    "sponsor",
    "client",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport {
    pub partners: Vec<String>,
    pub investors: Vec<String>,
    pub all_names: Vec<String>,
}

/// Single pass of heuristic classification over one document snapshot.
/// Pure read: never navigates, never errors on malformed markup.
pub fn extract_organizations(snapshot: &PageSnapshot) -> ExtractionReport {
    let document = Html::parse_document(snapshot.page_source());

    let container_selector = container_selector();
    let logo_selector = Selector::parse("a img").expect("valid selector");
    let leaf_selector = Selector::parse("li, p, span").expect("valid selector");

    let mut partners: BTreeSet<String> = BTreeSet::new();
    let mut investors: BTreeSet<String> = BTreeSet::new();

    for container in document.select(&container_selector) {
        let container_text: String = container.text().collect();
        let context = classify_container(&container_text);

        for image in container.select(&logo_selector) {
            if let Some(candidate) = logo_candidate(image) {
                if let Some(raw) = logo_candidate_name(&candidate, snapshot.host()) {
                    insert_candidate(&raw, context, &mut partners, &mut investors);
                }
            }
        }

        for leaf in container.select(&leaf_selector) {
            if has_child_elements(leaf) {
                continue;
            }
            let text: String = leaf.text().collect();
            let text = text.trim();
            if looks_like_company_name(text) {
                insert_candidate(text, context, &mut partners, &mut investors);
            }
        }
    }

    sweep_known_entities(&document, &mut partners, &mut investors);

    finalize(partners, investors)
}

fn container_selector() -> Selector {
    let selector = CONTAINER_CLASS_HINTS
        .iter()
        .map(|hint| format!(r#"[class*="{}"]"#, hint))
        .join(", ");
    Selector::parse(&selector).expect("valid selector")
}

fn logo_candidate(image: ElementRef<'_>) -> Option<LogoCandidate> {
    let link = image
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "a")?;

    Some(LogoCandidate {
        alt: image.value().attr("alt").map(str::to_string),
        title: image.value().attr("title").map(str::to_string),
        link_label: link.value().attr("aria-label").map(str::to_string),
        link_href: link.value().attr("href").map(str::to_string),
    })
}

fn has_child_elements(element: ElementRef<'_>) -> bool {
    element
        .children()
        .any(|child| ElementRef::wrap(child).is_some())
}

fn insert_candidate(
    raw: &str,
    context: ContainerContext,
    partners: &mut BTreeSet<String>,
    investors: &mut BTreeSet<String>,
) {
    let name = match clean_candidate_name(raw) {
        Some(name) => name,
        None => return,
    };

    match classify_name(&name, context) {
        Classification::Investor => insert_first_wins(name, investors, partners),
        Classification::Partner => insert_first_wins(name, partners, investors),
    }
}

// A name keeps its first classification; a later container cannot split it
// across both lists.
fn insert_first_wins(name: String, target: &mut BTreeSet<String>, other: &BTreeSet<String>) {
    if !other.contains(&name) {
        target.insert(name);
    }
}

/// Verbatim search of the whole page text against the curated allow-lists.
/// A hit is authoritative and reclaims the name from the other list.
fn sweep_known_entities(
    document: &Html,
    partners: &mut BTreeSet<String>,
    investors: &mut BTreeSet<String>,
) {
    let page_text: String = document.root_element().text().collect();

    for investor in WELL_KNOWN_INVESTORS {
        if page_text.contains(investor) {
            partners.remove(investor);
            investors.insert(investor.to_string());
        }
    }

    for partner in WELL_KNOWN_PARTNERS {
        if page_text.contains(partner) {
            investors.remove(partner);
            partners.insert(partner.to_string());
        }
    }
}

fn finalize(partners: BTreeSet<String>, investors: BTreeSet<String>) -> ExtractionReport {
    let all_names: Vec<String> = partners
        .iter()
        .merge(investors.iter())
        .dedup()
        .cloned()
        .collect();

    ExtractionReport {
        partners: partners.into_iter().collect(),
        investors: investors.into_iter().collect(),
        all_names,
    }
}
