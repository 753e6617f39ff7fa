use url::Url;

/// Read-only capture of a loaded page: the URL the browser settled on and the
/// serialized document source at capture time.
pub struct PageSnapshot {
    url: Url,
    page_source: String,
}

impl PageSnapshot {
    pub fn new(url: Url, page_source: String) -> Self {
        PageSnapshot { url, page_source }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Hostname of the captured page, empty for hostless URLs.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("")
    }

    pub fn page_source(&self) -> &str {
        &self.page_source
    }
}
