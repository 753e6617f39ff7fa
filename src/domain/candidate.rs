use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// A logo image nested inside a hyperlink, carrying every attribute a name
/// can be derived from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LogoCandidate {
    pub alt: Option<String>,
    pub title: Option<String>,
    pub link_label: Option<String>,
    pub link_href: Option<String>,
}

static CAPITALIZED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9\s&.\-]*$").expect("valid regex"));
static SECTOR_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Capital|Ventures|Partners|Labs|Fund|VC|Digital|Crypto|Web3)\b")
        .expect("valid regex")
});
static LEGAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Inc|LLC|Ltd|Corp|Company|Co)\b").expect("valid regex"));
static LOGO_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*logo\s*").expect("valid regex"));
static HOST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(www\.|cdn\.)").expect("valid regex"));
static HOST_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\.(com|org|net|io|xyz|co|ai|fi|tech|finance|capital|ventures|fund|labs|partners).*$",
    )
    .expect("valid regex")
});

/// Navigation chrome and filler words that are never organization names.
const STOP_WORDS: [&str; 13] = [
    "the",
    "and",
    "our",
    "your",
    "partners",
    "investors",
    "ecosystem",
    "about",
    "contact",
    "home",
    "blog",
    "docs",
    "documentation",
];

/// Best name for a logo candidate: alt text, then title, then the link's
/// accessible label. Blank attributes fall through. With none present the
/// link hostname is used, but only when it points off-site.
pub fn logo_candidate_name(candidate: &LogoCandidate, page_host: &str) -> Option<String> {
    let attr_name = [&candidate.alt, &candidate.title, &candidate.link_label]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty());

    match attr_name {
        Some(name) => Some(name.clone()),
        None => match candidate.link_href {
            Some(ref href) => name_from_external_host(href, page_host),
            None => None,
        },
    }
}

/// Hostname-derived fallback for links leaving the current site.
pub fn name_from_external_host(href: &str, page_host: &str) -> Option<String> {
    let parsed = Url::parse(href).ok()?;
    let host = parsed.host_str()?;
    if host == page_host {
        return None;
    }
    Some(name_from_hostname(host))
}

/// Turn a hostname into a displayable name: drop a leading www/cdn label,
/// drop everything from the first known TLD or industry suffix, split the
/// rest into words and capitalize each.
pub fn name_from_hostname(host: &str) -> String {
    let stripped = HOST_PREFIX.replace(host, "");
    let stripped = HOST_SUFFIX.replace(&stripped, "");

    stripped
        .split(['-', '_', '.'])
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Trim, drop the literal word "logo", reject one-character leftovers.
pub fn clean_candidate_name(raw: &str) -> Option<String> {
    let cleaned = LOGO_WORD.replace_all(raw.trim(), "").to_string();
    match cleaned.chars().count() > 1 {
        true => Some(cleaned),
        false => None,
    }
}

/// Whether a raw text leaf reads like an organization name: 2 to 50
/// characters, shaped like a proper noun or carrying a sector/legal keyword,
/// and not a stop word.
pub fn looks_like_company_name(text: &str) -> bool {
    let length = text.chars().count();
    if !(2..=50).contains(&length) {
        return false;
    }

    let patterned = CAPITALIZED_NAME.is_match(text)
        || SECTOR_KEYWORD.is_match(text)
        || LEGAL_SUFFIX.is_match(text);

    patterned && !STOP_WORDS.iter().any(|word| text.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::{
        clean_candidate_name, logo_candidate_name, looks_like_company_name,
        name_from_external_host, name_from_hostname, LogoCandidate,
    };

    #[test]
    fn hostname_words_are_capitalized() {
        assert_eq!(name_from_hostname("my-cool-partner.io"), "My Cool Partner");
        assert_eq!(name_from_hostname("www.acme-labs.com"), "Acme Labs");
        assert_eq!(name_from_hostname("super_swap.finance"), "Super Swap");
        assert_eq!(name_from_hostname("www.framework.ventures"), "Framework");
    }

    #[test]
    fn same_host_links_yield_no_name() {
        let result = name_from_external_host("https://example.com/team", "example.com");
        assert_eq!(result, None);

        let result = name_from_external_host("https://my-cool-partner.io/", "example.com");
        assert_eq!(result, Some("My Cool Partner".to_string()));
    }

    #[test]
    fn attribute_priority_is_alt_then_title_then_label() {
        let candidate = LogoCandidate {
            alt: Some("Acme Capital".to_string()),
            title: Some("Acme".to_string()),
            link_label: None,
            link_href: None,
        };
        assert_eq!(
            logo_candidate_name(&candidate, "example.com"),
            Some("Acme Capital".to_string())
        );

        let candidate = LogoCandidate {
            alt: Some(String::new()),
            title: None,
            link_label: Some("Beta Labs".to_string()),
            link_href: Some("https://beta-labs.com/".to_string()),
        };
        assert_eq!(
            logo_candidate_name(&candidate, "example.com"),
            Some("Beta Labs".to_string())
        );
    }

    #[test]
    fn cleaning_strips_the_logo_word() {
        assert_eq!(
            clean_candidate_name("  Acme Logo "),
            Some("Acme".to_string())
        );
        assert_eq!(clean_candidate_name("logo"), None);
        assert_eq!(clean_candidate_name("X"), None);
        assert_eq!(
            clean_candidate_name("Beta Ventures"),
            Some("Beta Ventures".to_string())
        );
    }

    #[test]
    fn company_name_predicate_accepts_proper_nouns_and_keywords() {
        assert!(looks_like_company_name("Acme Capital"));
        assert!(looks_like_company_name("Beta & Sons Co"));
        assert!(looks_like_company_name("web3 fund"));
    }

    #[test]
    fn company_name_predicate_rejects_stop_words_and_noise() {
        assert!(!looks_like_company_name("the"));
        assert!(!looks_like_company_name("Partners"));
        assert!(!looks_like_company_name("a"));
        assert!(!looks_like_company_name("lowercase words only"));
        assert!(!looks_like_company_name(
            "a marketing sentence that rambles on for far too long to be a name"
        ));
    }
}
