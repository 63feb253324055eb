use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::extract::Waits;
use crate::pacing::{LazyLoader, Pacer};

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "https://www.amazon.in/gp/bestsellers/kitchen/ref=zg_bs_nav_kitchen_0",
    "https://www.amazon.in/gp/bestsellers/shoes/ref=zg_bs_nav_shoes_0",
];

/// Run settings, read from an optional `deals.toml` and `DEALS_*` env vars.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scheme and host prefixed to relative product links.
    pub origin: String,
    pub categories: Vec<String>,
    /// Listing pages per category, starting at 1.
    pub pages: u32,
    pub scroll_steps: usize,
    pub delay_min_secs: u64,
    pub delay_max_secs: u64,
    /// Fixed pause after each login step.
    pub settle_secs: u64,
    pub primary_wait_secs: u64,
    pub gallery_wait_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: "https://www.amazon.in".to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            pages: 1,
            scroll_steps: 20,
            delay_min_secs: 3,
            delay_max_secs: 10,
            settle_secs: 2,
            primary_wait_secs: 10,
            gallery_wait_secs: 20,
            request_timeout_secs: 30,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36".to_string(),
            email: None,
            password: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Config::builder()
            .add_source(File::with_name("deals").required(false))
            .add_source(
                Environment::with_prefix("DEALS")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("categories"),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn waits(&self) -> Waits {
        Waits {
            primary: Duration::from_secs(self.primary_wait_secs),
            gallery: Duration::from_secs(self.gallery_wait_secs),
        }
    }

    /// Randomised delay between coarse actions.
    pub fn pacer(&self) -> Pacer {
        Pacer::new(
            Duration::from_secs(self.delay_min_secs),
            Duration::from_secs(self.delay_max_secs),
        )
    }

    pub fn settle(&self) -> Pacer {
        Pacer::fixed(Duration::from_secs(self.settle_secs))
    }

    pub fn lazy_loader(&self) -> LazyLoader {
        LazyLoader::new(self.scroll_steps, self.pacer())
    }

    /// Stored credentials, if both halves are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            email: self.email.clone()?,
            password: self.password.clone()?,
        })
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_pacing() {
        let s = Settings::default();
        assert_eq!(s.pages, 1);
        assert_eq!(s.scroll_steps, 20);
        assert_eq!(s.waits().primary, Duration::from_secs(10));
        assert_eq!(s.waits().gallery, Duration::from_secs(20));
        assert_eq!(s.categories.len(), 2);
        assert!(s.credentials().is_none());
    }

    #[test]
    fn partial_settings_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.toml");
        std::fs::write(&path, "pages = 3\nscroll_steps = 0\nemail = \"a@b.test\"\n").unwrap();
        let s: Settings = Config::builder()
            .add_source(File::from(path))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.pages, 3);
        assert_eq!(s.scroll_steps, 0);
        assert_eq!(s.origin, "https://www.amazon.in");
        assert!(s.credentials().is_none(), "password still missing");
    }
}
