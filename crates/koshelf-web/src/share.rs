//! Sharing recap images: Web Share on mobile, download elsewhere.

use chrono::{Datelike, Utc};
use koshelf_i18n::{LocaleSource, Translator};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, error};

static MOBILE_USER_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("Invalid mobile user agent regex pattern")
});

static RECAP_FILENAME_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"koshelf_(\d{4})_").expect("Invalid recap filename regex pattern")
});

/// Translation key of the share sheet title.
pub const SHARE_TITLE_KEY: &str = "my-reading-recap";

/// What the page knows about the device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareEnvironment {
    /// `navigator.userAgent`
    pub user_agent: String,
    /// `navigator.maxTouchPoints`, when exposed.
    pub max_touch_points: Option<u32>,
    /// Both `navigator.share` and `navigator.canShare` exist.
    pub web_share_supported: bool,
}

impl ShareEnvironment {
    /// Mobile user agent, or more than two touch points.
    pub fn is_mobile(&self) -> bool {
        MOBILE_USER_AGENT.is_match(&self.user_agent)
            || self.max_touch_points.is_some_and(|points| points > 2)
    }

    /// Share through the OS sheet instead of downloading.
    pub fn uses_web_share(&self) -> bool {
        self.is_mobile() && self.web_share_supported
    }
}

/// What a share button click should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Hand the image to the Web Share API.
    WebShare {
        /// Sheet title.
        title: String,
        /// Accompanying message.
        text: String,
        /// Image location.
        url: String,
        /// File name for the shared image.
        filename: String,
    },
    /// Save the image through a download link.
    Download {
        /// Image location.
        url: String,
        /// Suggested file name.
        filename: String,
    },
}

impl ShareAction {
    /// Download of the same image.
    #[must_use]
    pub fn as_download(&self) -> Self {
        match self {
            Self::WebShare { url, filename, .. } | Self::Download { url, filename } => {
                Self::Download {
                    url: url.clone(),
                    filename: filename.clone(),
                }
            }
        }
    }
}

/// Result of a Web Share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The sheet completed.
    Shared,
    /// The user dismissed the sheet.
    Cancelled,
    /// Sharing failed or the file was not shareable.
    Failed(String),
}

/// Follow-up after a share attempt: a download when sharing failed.
pub fn after_share(action: &ShareAction, outcome: &ShareOutcome) -> Option<ShareAction> {
    match outcome {
        ShareOutcome::Shared | ShareOutcome::Cancelled => None,
        ShareOutcome::Failed(reason) => {
            error!(reason = %reason, "Share failed");
            Some(action.as_download())
        }
    }
}

/// Year embedded in names like `koshelf_2024_story.webp`, else the current year.
pub fn recap_year(filename: &str) -> String {
    RECAP_FILENAME_YEAR
        .captures(filename)
        .and_then(|captures| captures.get(1))
        .map_or_else(
            || Utc::now().year().to_string(),
            |year| year.as_str().to_string(),
        )
}

/// Message shared alongside the image.
pub fn share_text(year: &str) -> String {
    format!(
        "📚 My {year} reading journey! These graphics were crafted by KoShelf, \
         my KoReader reading companion. Check it out: https://github.com/zanivann/KoShelf"
    )
}

/// Decide how to share `url`. `None` when the button lacks a URL or file name.
pub fn plan_share<L: LocaleSource>(
    env: &ShareEnvironment,
    translator: &Translator<L>,
    url: Option<&str>,
    filename: Option<&str>,
) -> Option<ShareAction> {
    let url = url.filter(|u| !u.is_empty())?.to_string();
    let filename = filename.filter(|f| !f.is_empty())?.to_string();

    let action = if env.uses_web_share() {
        ShareAction::WebShare {
            title: translator.get(SHARE_TITLE_KEY),
            text: share_text(&recap_year(&filename)),
            url,
            filename,
        }
    } else {
        ShareAction::Download { url, filename }
    };

    debug!(?action, "Share planned");
    Some(action)
}

/// Localized share labels, present only when Web Share is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLabels {
    /// Modal title and header button label.
    pub recap_label: String,
    /// Text of each share button.
    pub button_text: String,
}

impl ShareLabels {
    /// Resolve labels for `env`.
    pub fn resolve<L: LocaleSource>(
        env: &ShareEnvironment,
        translator: &Translator<L>,
    ) -> Option<Self> {
        env.uses_web_share().then(|| Self {
            recap_label: translator.get("share.recap-label"),
            button_text: translator.get("share"),
        })
    }
}
