use super::style_map::{StyleMap, TextStyle};

/// The two toggleable character styles. Size is handled separately since it
/// carries a value instead of toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFlag {
    Bold,
    Underline,
}

impl StyleFlag {
    fn get(self, style: TextStyle) -> bool {
        match self {
            StyleFlag::Bold => style.bold,
            StyleFlag::Underline => style.underline,
        }
    }

    fn set(self, mut style: TextStyle, value: bool) -> TextStyle {
        match self {
            StyleFlag::Bold => style.bold = value,
            StyleFlag::Underline => style.underline = value,
        }
        style
    }
}

/// Whether the byte at `pos` carries the flag. Out-of-range positions read
/// as unstyled.
pub fn has_flag(letters: &str, pos: usize, flag: StyleFlag, map: &StyleMap) -> bool {
    letters
        .as_bytes()
        .get(pos)
        .map(|&b| flag.get(map.style_of(b as char)))
        .unwrap_or(false)
}

/// Toggle a flag across `start..end`. The flag's presence at the start of
/// the span decides the direction: present removes it from the whole span,
/// absent adds it to the whole span. Other flags and size overrides on the
/// span are preserved.
pub fn toggle_flag(
    letters: &str,
    start: usize,
    end: usize,
    flag: StyleFlag,
    map: &mut StyleMap,
) -> String {
    let target = !has_flag(letters, start, flag, map);
    rewrite_span(letters, start, end, map, |style| flag.set(style, target))
}

/// Set an explicit size on `start..end`. Every byte in the span takes the
/// new size, so intersections with earlier size spans are overwritten
/// (last-applied-wins).
pub fn apply_size(
    letters: &str,
    start: usize,
    end: usize,
    size: i32,
    map: &mut StyleMap,
) -> String {
    rewrite_span(letters, start, end, map, |mut style| {
        style.size = Some(size);
        style
    })
}

fn rewrite_span(
    letters: &str,
    start: usize,
    end: usize,
    map: &mut StyleMap,
    f: impl Fn(TextStyle) -> TextStyle,
) -> String {
    let mut bytes = letters.as_bytes().to_vec();
    let end = end.min(bytes.len());
    for b in bytes.iter_mut().take(end).skip(start) {
        let style = f(map.style_of(*b as char));
        *b = map.get_or_insert(style) as u8;
    }
    // Style letters are always ASCII.
    String::from_utf8(bytes).unwrap_or_else(|_| letters.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fltk::enums::Font;

    fn map() -> StyleMap {
        StyleMap::new(Font::Helvetica, 16)
    }

    #[test]
    fn test_toggle_adds_flag_to_whole_span() {
        let mut map = map();
        let letters = "AAAAAAAAAAA"; // "Hello World"
        let out = toggle_flag(letters, 0, 5, StyleFlag::Bold, &mut map);
        assert_eq!(out.len(), letters.len());
        for pos in 0..5 {
            assert!(has_flag(&out, pos, StyleFlag::Bold, &map));
        }
        for pos in 5..out.len() {
            assert!(!has_flag(&out, pos, StyleFlag::Bold, &map));
        }
    }

    #[test]
    fn test_toggle_twice_is_idempotent() {
        let mut map = map();
        let letters = "AAAAAAAA";
        let once = toggle_flag(letters, 2, 6, StyleFlag::Underline, &mut map);
        let twice = toggle_flag(&once, 2, 6, StyleFlag::Underline, &mut map);
        assert_eq!(twice, letters);
    }

    #[test]
    fn test_toggle_direction_follows_span_start() {
        let mut map = map();
        // Style only the first half bold, then toggle across the whole
        // span: bold at the start means the whole span goes unstyled.
        let letters = toggle_flag("AAAAAA", 0, 3, StyleFlag::Bold, &mut map);
        let out = toggle_flag(&letters, 0, 6, StyleFlag::Bold, &mut map);
        for pos in 0..6 {
            assert!(!has_flag(&out, pos, StyleFlag::Bold, &map));
        }
    }

    #[test]
    fn test_flags_are_independent_on_the_same_span() {
        let mut map = map();
        let bold = toggle_flag("AAAA", 0, 4, StyleFlag::Bold, &mut map);
        let both = toggle_flag(&bold, 0, 4, StyleFlag::Underline, &mut map);
        assert!(has_flag(&both, 0, StyleFlag::Bold, &map));
        assert!(has_flag(&both, 0, StyleFlag::Underline, &map));
        // Removing underline leaves bold in place.
        let bold_again = toggle_flag(&both, 0, 4, StyleFlag::Underline, &mut map);
        assert_eq!(bold_again, bold);
    }

    #[test]
    fn test_size_coexists_with_toggles() {
        let mut map = map();
        let sized = apply_size("AAAA", 0, 4, 25, &mut map);
        let out = toggle_flag(&sized, 0, 4, StyleFlag::Bold, &mut map);
        let style = map.style_of(out.as_bytes()[0] as char);
        assert!(style.bold);
        assert_eq!(style.size, Some(25));
    }

    #[test]
    fn test_later_size_wins_on_overlap() {
        let mut map = map();
        let first = apply_size("AAAAAAAA", 0, 6, 20, &mut map);
        let second = apply_size(&first, 4, 8, 30, &mut map);
        let style_at = |s: &str, pos: usize| map.style_of(s.as_bytes()[pos] as char).size;
        assert_eq!(style_at(&second, 0), Some(20));
        assert_eq!(style_at(&second, 3), Some(20));
        assert_eq!(style_at(&second, 4), Some(30));
        assert_eq!(style_at(&second, 7), Some(30));
    }

    #[test]
    fn test_span_end_is_clamped_to_length() {
        let mut map = map();
        let out = toggle_flag("AAA", 1, 10, StyleFlag::Bold, &mut map);
        assert_eq!(out.len(), 3);
        assert!(has_flag(&out, 2, StyleFlag::Bold, &map));
    }

    #[test]
    fn test_has_flag_out_of_range_is_unstyled() {
        let map = map();
        assert!(!has_flag("AA", 5, StyleFlag::Bold, &map));
    }

    #[test]
    fn test_rewrite_past_interning_cap_stays_ascii_and_applies() {
        let mut map = map();
        // Exhaust the map with distinct sizes so the next apply lands on
        // the cap's fallback entry.
        let mut letters = "AAAA".to_string();
        for size in 1..200 {
            letters = apply_size(&letters, 0, 4, size, &mut map);
        }
        let out = apply_size("AAAA", 0, 4, 500, &mut map);
        assert!(out.is_ascii());
        // The fallback entry is still a styled entry, not plain text.
        assert_ne!(out, "AAAA");
        assert!(map.style_of(out.as_bytes()[0] as char).size.is_some());
    }
}
