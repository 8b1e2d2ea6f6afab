use std::sync::LazyLock;
use std::time::Duration;

use concierge_core::config::ToolsConfig;
use concierge_core::errors::ToolError;
use concierge_core::traits::IPageSource;
use regex::Regex;
use tracing::debug;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; campus-concierge/0.1)";

/// Wide enough that html2text never wraps a notice line.
const TEXT_WIDTH: usize = 1_000;

static FOOTNOTE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\[\d+\]: ").ok());
static LINK_REF: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\[\d+\]").ok());
static DECORATION: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^(#+|\*|-|\d+\.)\s+").ok());
static RULE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[\s\-─│┼┬┴├┤═]+$").ok());
static SPACES: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Reduce an HTML page to its visible text, one block per line.
///
/// html2text does the parsing; its plain-text decorations (heading hashes,
/// list bullets, link footnotes, table rules) are removed afterwards.
pub fn strip_markup(html: &str) -> String {
    let text = html2text::from_read(html.as_bytes(), TEXT_WIDTH)
        .unwrap_or_else(|_| html.to_string());

    text.lines()
        .filter(|line| !matches_line(&FOOTNOTE, line) && !matches_line(&RULE, line))
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn matches_line(re: &LazyLock<Option<Regex>>, line: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(line))
}

fn clean_line(line: &str) -> String {
    let mut line = line.replace('\u{a0}', " ").replace("**", "");
    if let Some(re) = LINK_REF.as_ref() {
        line = re.replace_all(&line, "$1").into_owned();
    }
    if let Some(re) = SPACES.as_ref() {
        line = re.replace_all(&line, " ").into_owned();
    }
    let line = line.trim();
    match DECORATION.as_ref() {
        Some(re) => re.replace(line, "").trim().to_string(),
        None => line.to_string(),
    }
}

/// Blocking HTTP fetch against the college website.
pub struct HttpPageSource {
    client: reqwest::blocking::Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self, ToolError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ToolError::failed("http", format!("client build failed: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    pub fn from_config(config: &ToolsConfig) -> Result<Self, ToolError> {
        Self::new(config.base_url.clone(), config.scrape_timeout_ms)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl IPageSource for HttpPageSource {
    fn fetch_text(&self, path: &str) -> Result<String, ToolError> {
        let url = self.url(path);
        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                ToolError::Timeout {
                    tool: "http".into(),
                    timeout_ms: self.timeout_ms,
                }
            } else {
                ToolError::failed("http", format!("GET {url}: {e}"))
            }
        })?;

        let status = response.status();
        // Firewall pages are often served with 403; keep the body so the
        // caller can detect the marker.
        let body = response
            .text()
            .map_err(|e| ToolError::failed("http", format!("reading {url}: {e}")))?;
        if !status.is_success() && status != reqwest::StatusCode::FORBIDDEN {
            return Err(ToolError::failed("http", format!("GET {url} returned {status}")));
        }

        debug!(url = %url, status = %status, bytes = body.len(), "page fetched");
        Ok(strip_markup(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::ToolName;

    #[test]
    fn strips_tags_scripts_and_entities() {
        let html = "<html><head><style>p{}</style><script>var x = 1;</script></head>\
                    <body><h1>Notices</h1><p>Exam&nbsp;fee   due &amp; payable</p>\
                    <div><span>Holiday</span> on Monday &mdash; &eacute;t&eacute;</div></body></html>";
        let text = strip_markup(html);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"Notices"), "{text}");
        assert!(lines.contains(&"Exam fee due & payable"), "{text}");
        assert!(text.contains("Holiday on Monday"));
        assert!(text.contains("\u{2014} \u{e9}t\u{e9}"), "named entities decode: {text}");
        assert!(!text.contains("var x"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn links_and_lists_lose_their_decoration() {
        let html = "<ul><li><a href=\"/n/1\">Mid exam schedule</a></li>\
                    <li><a href=\"/n/2\">Fee notice</a></li></ul>";
        let text = strip_markup(html);
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Mid exam schedule", "Fee notice"]);
    }

    #[test]
    fn firewall_page_keeps_its_marker() {
        let html = "<html><body><h2>Access Blocked</h2><p>MalCare Firewall</p></body></html>";
        let text = strip_markup(html);
        let markers = vec!["MalCare".to_string(), "Firewall".to_string()];
        assert!(matches!(
            crate::scrape::blocked::detect_block(ToolName::Placements, &text, &markers),
            Err(ToolError::Blocked { .. })
        ));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let source = HttpPageSource::new("https://example.edu/", 1000).unwrap();
        assert_eq!(source.url("/placements"), "https://example.edu/placements");
        assert_eq!(source.url("notifications"), "https://example.edu/notifications");
    }
}
