use std::sync::LazyLock;

use regex::Regex;

/// Which result list a candidate name belongs to.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Classification {
    Partner,
    Investor,
}

/// Context booleans computed from a container's full text. Independent
/// judgments: a block can read as both investment- and partnership-related.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerContext {
    pub investor: bool,
    pub partner: bool,
}

static INVESTOR_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)invest|fund|capital|venture|backed").expect("valid regex"));
static PARTNER_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)partner|ecosystem|integrate|built|powered").expect("valid regex")
});

/// Substrings that mark a name as a venture firm when the surrounding
/// context gives no signal.
const VC_INDICATORS: [&str; 5] = ["Capital", "Ventures", "Fund", "Partners", "VC"];

pub fn classify_container(text: &str) -> ContainerContext {
    ContainerContext {
        investor: INVESTOR_CONTEXT.is_match(text),
        partner: PARTNER_CONTEXT.is_match(text),
    }
}

/// Investor context outranks partner context. With neither, names carrying a
/// venture indicator go to investors and everything else to partners.
pub fn classify_name(name: &str, context: ContainerContext) -> Classification {
    if context.investor {
        Classification::Investor
    } else if context.partner {
        Classification::Partner
    } else if VC_INDICATORS
        .iter()
        .any(|indicator| name.contains(indicator))
    {
        Classification::Investor
    } else {
        Classification::Partner
    }
}

/// Funds recognized anywhere in the page text, independent of DOM structure.
pub const WELL_KNOWN_INVESTORS: [&str; 28] = [
    "Sequoia Capital",
    "Andreessen Horowitz",
    "a16z",
    "Kleiner Perkins",
    "Accel",
    "Founders Fund",
    "Google Ventures",
    "GV",
    "Bessemer Venture Partners",
    "Lightspeed Venture Partners",
    "Insight Partners",
    "Tiger Global",
    "Paradigm",
    "Pantera Capital",
    "Coinbase Ventures",
    "Binance Labs",
    "Framework Ventures",
    "Variant",
    "Union Square Ventures",
    "USV",
    "Galaxy Digital",
    "Jump Crypto",
    "Kraken Ventures",
    "Figment Capital",
    "Delphi Ventures",
    "Mechanism Capital",
    "CMS Holdings",
    "Placeholder",
];

/// Protocols and platforms recognized the same way, routed to partners.
pub const WELL_KNOWN_PARTNERS: [&str; 17] = [
    "Chainlink",
    "The Graph",
    "Polygon",
    "Arbitrum",
    "Optimism",
    "Aave",
    "Compound",
    "Uniswap",
    "SushiSwap",
    "Curve",
    "Balancer",
    "MakerDAO",
    "Synthetix",
    "Yearn",
    "1inch",
    "OpenSea",
    "Rarible",
];

#[cfg(test)]
mod tests {
    use super::{classify_container, classify_name, Classification, ContainerContext};

    #[test]
    fn finance_vocabulary_marks_investor_context() {
        let context = classify_container("Backed by the leading venture funds");
        assert!(context.investor);
        assert!(!context.partner);
    }

    #[test]
    fn partnership_vocabulary_marks_partner_context() {
        let context = classify_container("The ecosystem we integrate with");
        assert!(context.partner);
        assert!(!context.investor);
    }

    #[test]
    fn investor_context_outranks_partner_context() {
        let context = classify_container("Partners who invest in our mission");
        assert!(context.investor);
        assert!(context.partner);
        assert_eq!(
            classify_name("Acme", context),
            Classification::Investor
        );
    }

    #[test]
    fn venture_indicators_decide_neutral_context() {
        let neutral = ContainerContext::default();
        assert_eq!(
            classify_name("Acme Ventures", neutral),
            Classification::Investor
        );
        assert_eq!(classify_name("Acme", neutral), Classification::Partner);
        // Singular "Partner" is not the plural indicator.
        assert_eq!(
            classify_name("My Cool Partner", neutral),
            Classification::Partner
        );
    }
}
