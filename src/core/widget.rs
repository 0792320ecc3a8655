use crate::core::link::build_chat_link;
use crate::domain::model::{ChatLink, WidgetSettings};
use crate::domain::ports::BrowsingContext;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_phone_digits, Validate};
use std::sync::Once;

/// The floating chat button: builds the deep link and hands it to the host.
pub struct WhatsAppWidget<B: BrowsingContext> {
    link: ChatLink,
    analytics: bool,
    browser: B,
    ready: Once,
}

impl<B: BrowsingContext> WhatsAppWidget<B> {
    /// The link is built once up front; every click opens the same URL.
    pub fn new(settings: &WidgetSettings, browser: B) -> Result<Self> {
        settings.validate()?;
        let link = build_chat_link(&settings.phone, &settings.message)?;
        tracing::debug!("Chat link prepared: {}", link);

        Ok(Self {
            link,
            analytics: settings.analytics,
            browser,
            ready: Once::new(),
        })
    }

    /// Page-ready hook. Logs once per widget; later calls are no-ops.
    /// Returns whether this call was the one that fired.
    pub fn on_page_ready(&self) -> bool {
        let mut fired = false;
        self.ready.call_once(|| {
            tracing::info!("✅ WhatsApp widget loaded (chat with +{})", self.link.phone());
            fired = true;
        });
        fired
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_completed()
    }

    pub fn chat_link(&self) -> &ChatLink {
        &self.link
    }

    /// Asks the host to open the chat in a new browsing context.
    ///
    /// Nothing is reported back: a blocked pop-up looks exactly like success.
    pub fn open_chat_link(&self) {
        self.on_page_ready();

        if self.analytics {
            tracing::info!(
                event_category = "WhatsApp",
                event_label = "Widget Click",
                "click"
            );
        }

        tracing::debug!("Opening {}", self.link);
        self.browser.open_in_new_context(self.link.as_str());
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }
}

impl Validate for WidgetSettings {
    fn validate(&self) -> Result<()> {
        validate_phone_digits("phone", &self.phone)?;
        validate_non_empty_string("message", &self.message)?;
        Ok(())
    }
}
