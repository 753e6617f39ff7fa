use anyhow::Context;
use scraper::Html;
use url::Url;
use uuid::Uuid;

use crate::{
    configuration::{get_configuration, Settings},
    services::{
        discover_nav_links, extract_organizations, relevant_nav_links, section_headings, Droid,
        ExtractionReport,
    },
};

/// Embeddable entry point: validate the URL, read configuration, drive the
/// session and return the sorted, deduplicated name lists.
pub async fn scrape_organizations(
    url: &str,
    session_id: Option<String>,
) -> anyhow::Result<ExtractionReport> {
    let target = Url::parse(url).with_context(|| format!("Invalid URL provided: {}", url))?;
    let settings = get_configuration().context("Failed to read configuration")?;
    let session_label = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    run(target, session_label, settings).await
}

pub async fn run(
    target: Url,
    session_label: String,
    settings: Settings,
) -> anyhow::Result<ExtractionReport> {
    log::info!("Target URL: {}", target);

    let droid = Droid::connect(&settings.webdriver, &session_label).await?;
    let report = scrape(&droid, &target, &settings).await;

    if let Err(e) = droid.quit().await {
        log::warn!("Failed to close browser session cleanly: {:#}", e);
    }

    match report {
        Ok(report) => Ok(report),
        Err(e) => {
            log::error!("Error during extraction: {:#}", e);
            Err(e)
        }
    }
}

async fn scrape(droid: &Droid, target: &Url, settings: &Settings) -> anyhow::Result<ExtractionReport> {
    let webdriver = &settings.webdriver;

    log::info!("Navigating to website");
    let mut snapshot = droid
        .open(target, webdriver.page_load_timeout(), webdriver.settle_wait())
        .await?;

    // The parsed document is not Send; keep it scoped so the returned future
    // stays spawnable.
    let relevant = {
        let document = Html::parse_document(snapshot.page_source());
        let nav_links = discover_nav_links(&document);

        for heading in section_headings(&document) {
            log::debug!("Section heading: {}", heading);
        }

        relevant_nav_links(&nav_links)
    };
    log::info!("Identified {} relevant navigation links", relevant.len());

    if let Some(link) = relevant.first() {
        log::info!("Following link: \"{}\"", link.text);
        match snapshot.url().join(&link.href) {
            Ok(next) => {
                match droid
                    .open(&next, webdriver.follow_timeout(), webdriver.follow_settle())
                    .await
                {
                    Ok(followed) => snapshot = followed,
                    Err(e) => {
                        log::warn!("Page loading slowly, continuing with landing page: {:#}", e)
                    }
                }
            }
            Err(e) => log::warn!("Skipping unresolvable link {}: {}", link.href, e),
        }
    }

    Ok(extract_organizations(&snapshot))
}
