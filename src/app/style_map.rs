use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::{StyleTableEntryExt, TextAttr};

/// Style letter every byte starts with: plain text in the default font.
pub const DEFAULT_STYLE_CHAR: char = 'A';

// FLTK style chars are consecutive from 'A'. 58 entries keep every char in
// the ASCII range 'A'..='z' while covering the four bold/underline
// combinations times over a dozen distinct explicit sizes; interning past
// the cap reuses the last entry.
const MAX_STYLES: usize = 58;

/// One bold/underline/size combination applied to a byte range.
/// `size: None` means the shared default size, so default-size changes
/// flow through to every range without an explicit override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub bold: bool,
    pub underline: bool,
    pub size: Option<i32>,
}

/// Maps bold/underline/size combinations to FLTK style characters
/// ('A', 'B', 'C', ...). Dynamically grows as new combinations are applied;
/// the StyleTableEntryExt table is regenerated from it on demand.
pub struct StyleMap {
    styles: Vec<TextStyle>,
    lookup: HashMap<TextStyle, char>,
    family: Font,
    default_size: i32,
}

impl StyleMap {
    pub fn new(family: Font, default_size: i32) -> Self {
        let plain = TextStyle::default();
        let mut lookup = HashMap::new();
        lookup.insert(plain, DEFAULT_STYLE_CHAR);
        Self {
            styles: vec![plain],
            lookup,
            family,
            default_size,
        }
    }

    /// Get the style character for a combination, interning a new entry if
    /// this is the first time it is applied.
    pub fn get_or_insert(&mut self, style: TextStyle) -> char {
        if let Some(&ch) = self.lookup.get(&style) {
            return ch;
        }
        let idx = self.styles.len();
        if idx >= MAX_STYLES {
            return style_char(MAX_STYLES - 1);
        }
        let ch = style_char(idx);
        self.styles.push(style);
        self.lookup.insert(style, ch);
        ch
    }

    /// The combination a style character stands for. Unknown characters
    /// decode as plain text.
    pub fn style_of(&self, ch: char) -> TextStyle {
        let idx = (ch as usize).wrapping_sub(DEFAULT_STYLE_CHAR as usize);
        self.styles.get(idx).copied().unwrap_or_default()
    }

    /// Change the shared default size. Entries with an explicit size
    /// override are unaffected; everything else picks the new size up when
    /// the table is next regenerated.
    pub fn set_default_size(&mut self, size: i32) {
        self.default_size = size;
    }

    /// Build the style table for `set_highlight_data_ext`. Row order matches
    /// style character order.
    pub fn style_table(&self) -> Vec<StyleTableEntryExt> {
        self.styles
            .iter()
            .map(|style| StyleTableEntryExt {
                color: Color::Foreground,
                font: if style.bold {
                    bold_variant(self.family)
                } else {
                    self.family
                },
                size: style.size.unwrap_or(self.default_size),
                attr: if style.underline {
                    TextAttr::Underline
                } else {
                    TextAttr::None
                },
                bgcolor: Color::Background2,
            })
            .collect()
    }
}

fn style_char(idx: usize) -> char {
    (DEFAULT_STYLE_CHAR as u8 + idx as u8) as char
}

fn bold_variant(family: Font) -> Font {
    match family {
        Font::Helvetica => Font::HelveticaBold,
        Font::Courier => Font::CourierBold,
        Font::Times => Font::TimesBold,
        Font::Screen => Font::ScreenBold,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_is_the_default_char() {
        let mut map = StyleMap::new(Font::Helvetica, 16);
        assert_eq!(map.get_or_insert(TextStyle::default()), DEFAULT_STYLE_CHAR);
        assert_eq!(map.style_of(DEFAULT_STYLE_CHAR), TextStyle::default());
    }

    #[test]
    fn test_interning_is_stable() {
        let mut map = StyleMap::new(Font::Helvetica, 16);
        let bold = TextStyle { bold: true, ..Default::default() };
        let first = map.get_or_insert(bold);
        let second = map.get_or_insert(bold);
        assert_eq!(first, second);
        assert_eq!(map.style_of(first), bold);
    }

    #[test]
    fn test_distinct_combinations_get_distinct_chars() {
        let mut map = StyleMap::new(Font::Helvetica, 16);
        let bold = map.get_or_insert(TextStyle { bold: true, ..Default::default() });
        let under = map.get_or_insert(TextStyle { underline: true, ..Default::default() });
        let sized = map.get_or_insert(TextStyle { size: Some(14), ..Default::default() });
        assert_ne!(bold, under);
        assert_ne!(under, sized);
        assert_ne!(bold, sized);
    }

    #[test]
    fn test_table_rows_follow_char_order() {
        let mut map = StyleMap::new(Font::Helvetica, 16);
        let bold = TextStyle { bold: true, ..Default::default() };
        let ch = map.get_or_insert(bold);
        let table = map.style_table();
        let idx = ch as usize - DEFAULT_STYLE_CHAR as usize;
        assert_eq!(table[idx].font, Font::HelveticaBold);
        assert_eq!(table[idx].size, 16);
        assert_eq!(table[0].font, Font::Helvetica);
    }

    #[test]
    fn test_underline_sets_text_attr() {
        let mut map = StyleMap::new(Font::Helvetica, 16);
        let ch = map.get_or_insert(TextStyle { underline: true, ..Default::default() });
        let table = map.style_table();
        let idx = ch as usize - DEFAULT_STYLE_CHAR as usize;
        assert_eq!(table[idx].attr, TextAttr::Underline);
        assert_eq!(table[0].attr, TextAttr::None);
    }

    #[test]
    fn test_default_size_change_skips_explicit_sizes() {
        let mut map = StyleMap::new(Font::Helvetica, 16);
        let sized = map.get_or_insert(TextStyle { size: Some(25), ..Default::default() });
        map.set_default_size(14);
        let table = map.style_table();
        assert_eq!(table[0].size, 14);
        let idx = sized as usize - DEFAULT_STYLE_CHAR as usize;
        assert_eq!(table[idx].size, 25);
    }

    #[test]
    fn test_interning_caps_at_table_limit() {
        let mut map = StyleMap::new(Font::Helvetica, 16);
        let mut last = DEFAULT_STYLE_CHAR;
        for size in 1..200 {
            last = map.get_or_insert(TextStyle { size: Some(size), ..Default::default() });
        }
        assert_eq!(map.style_table().len(), MAX_STYLES);
        assert_eq!(last, style_char(MAX_STYLES - 1));
        // Style letters live in a byte-per-byte String, so every char the
        // map can ever hand out has to stay single-byte.
        assert!(last.is_ascii());
        assert_eq!(last, 'z');
    }
}
