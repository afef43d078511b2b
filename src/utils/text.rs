//! Text normalization for metadata fields.
//!
//! - `clamp_utf16()` - length limits measured the way browsers measure them
//! - `merge_keywords()` - comma-separated keyword set union
//! - `title_case_slug()` - breadcrumb labels from URL segments
//! - `non_empty()` - blank-string filter used by every override layer

/// Truncate `s` to at most `max` UTF-16 code units.
///
/// Leading/trailing whitespace is trimmed first and again after the cut.
/// A character is never split (a surrogate pair that would straddle the
/// limit is dropped whole). No word-boundary handling: the cut may land
/// mid-word.
pub fn clamp_utf16(s: &str, max: usize) -> String {
    let s = s.trim();
    let mut units = 0;
    let mut end = s.len();

    for (idx, c) in s.char_indices() {
        let width = c.len_utf16();
        if units + width > max {
            end = idx;
            break;
        }
        units += width;
    }

    s[..end].trim_end().to_string()
}

/// Length of `s` in UTF-16 code units.
#[inline]
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Merge comma-separated keyword lists into one set.
///
/// Order follows first appearance; duplicates are detected
/// case-insensitively and the first spelling wins.
pub fn merge_keywords<'a>(sources: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut merged: Vec<&str> = Vec::new();

    for source in sources {
        for keyword in source.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            let folded = keyword.to_lowercase();
            if !seen.contains(&folded) {
                seen.push(folded);
                merged.push(keyword);
            }
        }
    }

    (!merged.is_empty()).then(|| merged.join(", "))
}

/// Turn a URL segment into a display label.
///
/// `design-system_guides` -> `Design System Guides`
pub fn title_case_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trimmed value, or `None` when blank.
#[inline]
pub fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod clamp {
        use super::*;

        #[test]
        fn short_text_untouched() {
            assert_eq!(clamp_utf16("BiblioKit", 60), "BiblioKit");
        }

        #[test]
        fn cuts_mid_word() {
            assert_eq!(clamp_utf16("Design systems", 8), "Design s");
        }

        #[test]
        fn trims_around_cut() {
            assert_eq!(clamp_utf16("  Design systems  ", 7), "Design");
        }

        #[test]
        fn never_splits_surrogate_pair() {
            // "ab😀" is 4 UTF-16 units; a limit of 3 would split the emoji
            assert_eq!(clamp_utf16("ab😀", 3), "ab");
            assert_eq!(clamp_utf16("ab😀", 4), "ab😀");
        }

        #[test]
        fn counts_utf16_not_bytes() {
            let text = "é".repeat(60);
            let clamped = clamp_utf16(&text, 60);
            assert_eq!(clamped, text);
            assert_eq!(utf16_len(&clamped), 60);
        }
    }

    #[test]
    fn test_merge_keywords() {
        let merged = merge_keywords(["Design Systems", "figma, design systems", "BiblioKit"]);
        assert_eq!(merged.as_deref(), Some("Design Systems, figma, BiblioKit"));
    }

    #[test]
    fn test_merge_keywords_empty() {
        assert_eq!(merge_keywords(["", " , "]), None);
    }

    #[test]
    fn test_title_case_slug() {
        assert_eq!(title_case_slug("design-system_guides"), "Design System Guides");
        assert_eq!(title_case_slug("blog"), "Blog");
        assert_eq!(title_case_slug("--a--b"), "A B");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  x "), Some("x"));
        assert_eq!(non_empty(" \t"), None);
    }
}
