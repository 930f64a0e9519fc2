//! Action handlers: UpdateAction dispatch to the outside world
//!
//! Badge clicks and link opens go through an [`InteractionSink`] so the TUI
//! and headless drivers can route them differently.

use jobdash_core::prelude::*;
use jobdash_core::{Dataset, RowSource};

use crate::config::LinkSettings;
use crate::controller::BadgeClick;
use crate::message::Message;
use crate::UpdateAction;

/// Receiver for interactions that leave the dashboard
#[cfg_attr(test, mockall::automock)]
pub trait InteractionSink {
    /// A status or priority badge was clicked
    fn badge_clicked(&mut self, click: &BadgeClick);

    /// A row link was activated with an already normalized URL
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// Default sink: logs everything, opens links in a browser when enabled
#[derive(Debug, Clone, Default)]
pub struct LoggingSink {
    links: LinkSettings,
}

impl LoggingSink {
    pub fn new(links: LinkSettings) -> Self {
        Self { links }
    }
}

impl InteractionSink for LoggingSink {
    fn badge_clicked(&mut self, click: &BadgeClick) {
        info!(
            "Forwarded {} badge '{}' for row {}",
            click.kind, click.label, click.id
        );
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        if !self.links.open_in_browser {
            info!("Link {} not opened (browser disabled)", url);
            return Ok(());
        }
        open_url_in_browser(url, &self.links.browser)?;
        info!("Opened {} in browser", url);
        Ok(())
    }
}

/// Execute an action; a returned message is fed back into the update loop
pub fn handle_action(
    action: UpdateAction,
    sink: &mut dyn InteractionSink,
    source: &dyn RowSource,
) -> Option<Message> {
    match action {
        UpdateAction::ForwardBadgeClick(click) => {
            sink.badge_clicked(&click);
            None
        }

        UpdateAction::OpenUrl { url } => match sink.open_url(&url) {
            Ok(()) => None,
            Err(e) => {
                error!("Failed to open {}: {}", url, e);
                Some(Message::ActionFailed {
                    error: format!("Could not open {}", url),
                })
            }
        },

        UpdateAction::ReloadRows => match Dataset::load(source) {
            Ok(dataset) => Some(Message::RowsLoaded { dataset }),
            Err(e) => {
                error!("Failed to reload rows from {}: {}", source.name(), e);
                Some(Message::ActionFailed {
                    error: format!("Reload failed: {}", e),
                })
            }
        },
    }
}

/// Open `url` with `browser`, or the platform default opener when empty
pub fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    use std::process::Command;

    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::BadgeKind;
    use jobdash_core::{JsonFileSource, RowId, SeedRows};

    fn click() -> BadgeClick {
        BadgeClick {
            kind: BadgeKind::Priority,
            id: RowId(2),
            label: "High".to_string(),
        }
    }

    #[test]
    fn test_badge_click_is_forwarded_once() {
        let mut sink = MockInteractionSink::new();
        sink.expect_badge_clicked()
            .withf(|c| c.id == RowId(2) && c.label == "High")
            .times(1)
            .return_const(());
        sink.expect_open_url().never();

        let follow_up = handle_action(UpdateAction::ForwardBadgeClick(click()), &mut sink, &SeedRows);
        assert!(follow_up.is_none());
    }

    #[test]
    fn test_open_url_goes_to_sink() {
        let mut sink = MockInteractionSink::new();
        sink.expect_open_url()
            .withf(|url| url == "http://www.irfankhanportfolio.com")
            .times(1)
            .returning(|_| Ok(()));

        let follow_up = handle_action(
            UpdateAction::OpenUrl {
                url: "http://www.irfankhanportfolio.com".to_string(),
            },
            &mut sink,
            &SeedRows,
        );
        assert!(follow_up.is_none());
    }

    #[test]
    fn test_open_url_failure_reports_back() {
        let mut sink = MockInteractionSink::new();
        sink.expect_open_url()
            .returning(|_| Err(Error::terminal("no display")));

        let follow_up = handle_action(
            UpdateAction::OpenUrl {
                url: "http://x.com".to_string(),
            },
            &mut sink,
            &SeedRows,
        );
        assert!(matches!(follow_up, Some(Message::ActionFailed { .. })));
    }

    #[test]
    fn test_reload_rows_loads_from_source() {
        let mut sink = MockInteractionSink::new();
        let follow_up = handle_action(UpdateAction::ReloadRows, &mut sink, &SeedRows);
        match follow_up {
            Some(Message::RowsLoaded { dataset }) => assert_eq!(dataset.len(), 5),
            other => panic!("unexpected follow-up: {:?}", other),
        }
    }

    #[test]
    fn test_reload_rows_failure_reports_back() {
        let mut sink = MockInteractionSink::new();
        let missing = JsonFileSource::new("/nonexistent/jobdash/rows.json");
        let follow_up = handle_action(UpdateAction::ReloadRows, &mut sink, &missing);
        assert!(matches!(follow_up, Some(Message::ActionFailed { .. })));
    }

    #[test]
    fn test_logging_sink_skips_browser_when_disabled() {
        let mut sink = LoggingSink::new(LinkSettings {
            open_in_browser: false,
            browser: String::new(),
        });
        assert!(sink.open_url("http://example.com").is_ok());
    }
}
