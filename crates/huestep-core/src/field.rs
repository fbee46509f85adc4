//! Edit-field state for the hex and RGB text inputs.
//!
//! A field holds the user's in-progress text separately from the committed
//! color. A failed commit flags the field invalid and keeps both the text
//! and the committed color as they were.

use crate::color::{Rgb, hex_to_rgb, normalize_hex, normalize_rgb_input};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HexField {
    committed: String,
    text: String,
    invalid: bool,
}

impl HexField {
    pub fn new(committed: &str) -> Self {
        Self {
            committed: committed.to_string(),
            text: committed.to_uppercase(),
            invalid: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Replace the in-progress text.
    pub fn edit(&mut self, text: &str) {
        self.text = text.to_uppercase();
        self.invalid = false;
    }

    /// Validate the text. On success the text is rewritten to `"#RRGGBB"`.
    pub fn commit(&mut self) -> Option<String> {
        match normalize_hex(&self.text) {
            Some(normalized) => {
                self.invalid = false;
                self.text = normalized.clone();
                Some(normalized)
            }
            None => {
                self.invalid = true;
                None
            }
        }
    }

    /// Follow the committed color. Only a change of the committed color
    /// replaces the in-progress text.
    pub fn sync(&mut self, committed: &str) {
        if self.committed == committed {
            return;
        }
        self.committed = committed.to_string();
        self.text = committed.to_uppercase();
        self.invalid = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RgbField {
    committed: String,
    text: String,
    invalid: bool,
}

impl RgbField {
    pub fn new(committed: &str) -> Self {
        Self {
            committed: committed.to_string(),
            text: hex_to_rgb(committed).to_rgb_text(),
            invalid: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn edit(&mut self, text: &str) {
        self.text = text.to_string();
        self.invalid = false;
    }

    /// Validate the text. On success the text is rewritten to `"r, g, b"`.
    pub fn commit(&mut self) -> Option<Rgb> {
        match normalize_rgb_input(&self.text) {
            Some(rgb) => {
                self.invalid = false;
                self.text = rgb.to_rgb_text();
                Some(rgb)
            }
            None => {
                self.invalid = true;
                None
            }
        }
    }

    pub fn sync(&mut self, committed: &str) {
        if self.committed == committed {
            return;
        }
        self.committed = committed.to_string();
        self.text = hex_to_rgb(committed).to_rgb_text();
        self.invalid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_field_commit() {
        let mut field = HexField::new("#0000ff");
        assert_eq!(field.text(), "#0000FF");

        field.edit("abc");
        assert_eq!(field.text(), "ABC");
        assert_eq!(field.commit().as_deref(), Some("#AABBCC"));
        assert_eq!(field.text(), "#AABBCC");
        assert!(!field.is_invalid());
    }

    #[test]
    fn test_hex_field_invalid_keeps_text() {
        let mut field = HexField::new("#0000FF");
        field.edit("#12zz");
        assert_eq!(field.commit(), None);
        assert!(field.is_invalid());
        assert_eq!(field.text(), "#12ZZ");

        // Typing again clears the flag
        field.edit("#12");
        assert!(!field.is_invalid());
    }

    #[test]
    fn test_hex_field_sync() {
        let mut field = HexField::new("#0000FF");
        field.sync("#ff0000");
        assert_eq!(field.text(), "#FF0000");

        // Unchanged committed color leaves typing alone
        field.edit("f0");
        field.sync("#ff0000");
        assert_eq!(field.text(), "F0");

        field.edit("nope");
        field.commit();
        assert!(field.is_invalid());
        field.sync("#00FF00");
        assert_eq!(field.text(), "#00FF00");
        assert!(!field.is_invalid());
    }

    #[test]
    fn test_rgb_field_commit() {
        let mut field = RgbField::new("#FF0080");
        assert_eq!(field.text(), "255, 0, 128");

        field.edit("rgb(1, 2, 3)");
        assert_eq!(field.commit(), Some(Rgb::new(1, 2, 3)));
        assert_eq!(field.text(), "1, 2, 3");
    }

    #[test]
    fn test_rgb_field_invalid() {
        let mut field = RgbField::new("#000000");
        field.edit("rgb(1,2,3,4)");
        assert_eq!(field.commit(), None);
        assert!(field.is_invalid());
        assert_eq!(field.text(), "rgb(1,2,3,4)");
    }

    #[test]
    fn test_rgb_field_sync() {
        let mut field = RgbField::new("#000000");
        field.sync("#0A0B0C");
        assert_eq!(field.text(), "10, 11, 12");

        field.edit("10, 1");
        field.sync("#0A0B0C");
        assert_eq!(field.text(), "10, 1");
    }
}
