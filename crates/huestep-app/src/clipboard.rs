//! Platform clipboard.

use huestep_core::{Clipboard, ClipboardError};

/// System clipboard through `arboard`, opened on first use.
#[cfg(feature = "native")]
pub struct PlatformClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "native")]
impl PlatformClipboard {
    pub fn new(_ctx: &egui::Context) -> Self {
        Self { inner: None }
    }
}

#[cfg(feature = "native")]
impl Clipboard for PlatformClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        log::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

/// Clipboard writes handed to egui, which forwards them to the browser.
#[cfg(not(feature = "native"))]
pub struct PlatformClipboard {
    ctx: egui::Context,
}

#[cfg(not(feature = "native"))]
impl PlatformClipboard {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

#[cfg(not(feature = "native"))]
impl Clipboard for PlatformClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}
