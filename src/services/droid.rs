use std::time::Duration;

use anyhow::Context;
use fake_user_agent::get_chrome_rua;
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use url::Url;

use crate::{configuration::WebDriverSettings, domain::page_snapshot::PageSnapshot};

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    /// Open a session against the remote WebDriver endpoint.
    pub async fn connect(settings: &WebDriverSettings, session_label: &str) -> anyhow::Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg(&format!("--user-agent={}", get_chrome_rua()))
            .context("Failed to set user agent")?;

        let driver = WebDriver::new(&settings.url, caps)
            .await
            .with_context(|| format!("Failed to connect to remote session at {}", settings.url))?;

        log::info!("Connected to remote browser session {}", session_label);
        Ok(Droid { driver })
    }

    /// Navigate and capture a snapshot once the page has settled.
    pub async fn open(
        &self,
        url: &Url,
        timeout: Duration,
        settle: Duration,
    ) -> anyhow::Result<PageSnapshot> {
        self.driver
            .set_page_load_timeout(timeout)
            .await
            .context("Failed to set page load timeout")?;
        self.driver
            .goto(url.as_str())
            .await
            .with_context(|| format!("Failed to load {}", url))?;

        tokio::time::sleep(settle).await;

        let current_url = self
            .driver
            .current_url()
            .await
            .context("Failed to read current url")?;
        let page_source = self
            .driver
            .source()
            .await
            .context("Failed to read page source")?;

        Ok(PageSnapshot::new(current_url, page_source))
    }

    pub async fn quit(self) -> anyhow::Result<()> {
        self.driver
            .quit()
            .await
            .context("Failed to close browser session")?;
        Ok(())
    }
}
