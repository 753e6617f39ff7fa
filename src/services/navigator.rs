use scraper::{Html, Selector};

/// A navigation anchor discovered on the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// Link texts worth following before extraction.
const RELEVANT_LINK_TERMS: [&str; 6] = [
    "partner",
    "investor",
    "ecosystem",
    "backed",
    "portfolio",
    "about",
];

const SECTION_PREVIEW_LIMIT: usize = 10;

pub fn discover_nav_links(document: &Html) -> Vec<NavLink> {
    let anchor_selector =
        Selector::parse(r#"nav a, header a, [role="navigation"] a"#).expect("valid selector");

    document
        .select(&anchor_selector)
        .filter_map(|anchor| {
            anchor.value().attr("href").map(|href| {
                let text: String = anchor.text().collect();
                NavLink {
                    text: text.trim().to_string(),
                    href: href.to_string(),
                }
            })
        })
        .collect()
}

/// Links whose visible text suggests a partner/investor page.
pub fn relevant_nav_links(links: &[NavLink]) -> Vec<NavLink> {
    links
        .iter()
        .filter(|link| {
            let text = link.text.to_lowercase();
            RELEVANT_LINK_TERMS.iter().any(|term| text.contains(term))
        })
        .cloned()
        .collect()
}

/// Heading texts of the first few page sections. Diagnostic only; does not
/// influence extraction.
pub fn section_headings(document: &Html) -> Vec<String> {
    let section_selector =
        Selector::parse(r#"section, main, article, [class*="section"]"#).expect("valid selector");
    let heading_selector = Selector::parse("h1, h2, h3, h4").expect("valid selector");

    document
        .select(&section_selector)
        .take(SECTION_PREVIEW_LIMIT)
        .filter_map(|section| {
            section.select(&heading_selector).next().map(|heading| {
                let text: String = heading.text().collect();
                text.trim().to_string()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::{discover_nav_links, relevant_nav_links, section_headings, NavLink};

    const NAV_PAGE: &str = r#"
        <html><body>
            <header>
                <a href="/">Home</a>
                <a href="/about">About Us</a>
            </header>
            <nav>
                <a href="/partners">Our Partners</a>
                <a href="/pricing">Pricing</a>
            </nav>
            <div role="navigation">
                <a href="/investors">Investors</a>
            </div>
            <main>
                <a href="/cta">Get started</a>
            </main>
        </body></html>
    "#;

    #[test]
    fn nav_header_and_role_anchors_are_discovered() {
        let document = Html::parse_document(NAV_PAGE);
        let links = discover_nav_links(&document);

        let hrefs: Vec<&str> = links.iter().map(|link| link.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["/", "/about", "/partners", "/pricing", "/investors"]
        );
    }

    #[test]
    fn only_partner_flavored_links_are_relevant() {
        let document = Html::parse_document(NAV_PAGE);
        let links = discover_nav_links(&document);
        let relevant = relevant_nav_links(&links);

        assert_eq!(
            relevant,
            vec![
                NavLink {
                    text: "About Us".to_string(),
                    href: "/about".to_string(),
                },
                NavLink {
                    text: "Our Partners".to_string(),
                    href: "/partners".to_string(),
                },
                NavLink {
                    text: "Investors".to_string(),
                    href: "/investors".to_string(),
                },
            ]
        );
    }

    #[test]
    fn section_headings_are_previewed_in_order() {
        let html = r#"
            <html><body>
                <section><h2>What we build</h2><p>copy</p></section>
                <article><p>no heading here</p></article>
                <div class="team-section"><h3>The team</h3></div>
            </body></html>
        "#;
        let document = Html::parse_document(html);

        assert_eq!(section_headings(&document), vec!["What we build", "The team"]);
    }
}
