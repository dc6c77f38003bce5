//! Landing page loading with an embedded fallback
//!
//! - If `HOME_PAGE` is NOT set: serve the embedded page (no filesystem access)
//! - If `HOME_PAGE` IS set and the file exists: serve the file
//! - If `HOME_PAGE` IS set but the file is missing: serve the embedded page

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded static pages
#[derive(RustEmbed)]
#[folder = "static/"]
#[include = "*.html"]
struct EmbeddedPages;

/// File name of the landing page inside the embedded assets
pub const HOME_PAGE_FILE: &str = "home.html";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External landing page (from HOME_PAGE env var)
    home_page: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `home_page` should be `Some` only if the env var was set.
    pub fn new(home_page: Option<PathBuf>) -> Self {
        Self { home_page }
    }

    /// Read the landing page
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded page.
    pub fn read_home_page(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.home_page {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading home page from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedPages::get(HOME_PAGE_FILE)
            .map(|f| {
                tracing::trace!("Loading home page from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {HOME_PAGE_FILE} not found"),
                )
            })
    }

    /// Whether the landing page is served from the filesystem
    pub fn uses_external_home_page(&self) -> bool {
        self.home_page.as_ref().is_some_and(|p| p.exists())
    }

    /// Extract the embedded landing page to the filesystem (init command)
    ///
    /// Writes to the configured path, or `./home.html` if none is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        let path = self
            .home_page
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("./{HOME_PAGE_FILE}")));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Some(data) = EmbeddedPages::get(HOME_PAGE_FILE) {
            fs::write(&path, &*data.data)?;
            report.written.push(path.display().to_string());
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedPages::iter().map(|s| s.to_string()).collect()
    }
}
