//! Pivot (fixation) letter placement.

/// Word split around its pivot letter.
///
/// `lead + pivot + tail` always reproduces the original word. When the pivot
/// is disabled or the word is empty, the whole word sits in `lead`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WordParts<'a> {
    pub lead: &'a str,
    pub pivot: &'a str,
    pub tail: &'a str,
}

impl<'a> WordParts<'a> {
    pub const fn whole(word: &'a str) -> Self {
        Self {
            lead: word,
            pivot: "",
            tail: "",
        }
    }

    pub fn has_pivot(&self) -> bool {
        !self.pivot.is_empty()
    }

    /// Number of characters rendered before the pivot letter.
    pub fn lead_chars(&self) -> usize {
        self.lead.chars().count()
    }
}

/// Pivot position for a word of `char_count` characters, before clamping.
pub const fn pivot_band(char_count: usize) -> usize {
    match char_count {
        0 | 1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Zero-based character index of the pivot letter in `word`.
///
/// Always `< word.chars().count()` for a non-empty word; `0` for an empty one.
pub fn pivot_index(word: &str) -> usize {
    let char_count = word.chars().count();
    if char_count == 0 {
        return 0;
    }

    pivot_band(char_count).min(char_count - 1)
}

pub fn split_word(word: &str, pivot_enabled: bool) -> WordParts<'_> {
    if word.is_empty() || !pivot_enabled {
        return WordParts::whole(word);
    }

    let Some((start, pivot)) = word.char_indices().nth(pivot_index(word)) else {
        return WordParts::whole(word);
    };
    let end = start + pivot.len_utf8();

    WordParts {
        lead: &word[..start],
        pivot: &word[start..end],
        tail: &word[end..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(pivot_index("a"), 0);
        assert_eq!(pivot_index("ab"), 1);
        assert_eq!(pivot_index("abcde"), 1);
        assert_eq!(pivot_index("abcdef"), 2);
        assert_eq!(pivot_index("abcdefghi"), 2);
        assert_eq!(pivot_index("abcdefghij"), 3);
        assert_eq!(pivot_index("abcdefghijklm"), 3);
        assert_eq!(pivot_index("abcdefghijklmn"), 4);
        assert_eq!(pivot_index("abcdefghijklmno"), 4);
    }

    #[test]
    fn pivot_stays_inside_every_word_length() {
        let source = "abcdefghijklmnopqrstuvwxyzabcdefghijklmnop";
        for len in 1..=source.len() {
            let word = &source[..len];
            let index = pivot_index(word);
            assert!(index < len, "len={len} index={index}");
        }
        assert_eq!(pivot_index(""), 0);
    }

    #[test]
    fn split_reassembles_word() {
        for word in ["I", "to", "quick", "rapidly", "presentation", "incomprehensibly"] {
            let parts = split_word(word, true);
            assert!(parts.has_pivot());
            assert_eq!(parts.pivot.chars().count(), 1);
            let mut joined = String::from(parts.lead);
            joined.push_str(parts.pivot);
            joined.push_str(parts.tail);
            assert_eq!(joined, word);
        }
    }

    #[test]
    fn split_positions_pivot_by_band() {
        assert_eq!(
            split_word("quick", true),
            WordParts {
                lead: "q",
                pivot: "u",
                tail: "ick",
            }
        );
        assert_eq!(split_word("presentation", true).lead_chars(), 3);
        assert_eq!(split_word("a", true).lead, "");
    }

    #[test]
    fn split_counts_characters_not_bytes() {
        let parts = split_word("Sigüenza", true);
        assert_eq!(parts.lead, "Si");
        assert_eq!(parts.pivot, "g");
        assert_eq!(parts.tail, "üenza");

        let parts = split_word("añejo", true);
        assert_eq!(parts.pivot, "ñ");
    }

    #[test]
    fn disabled_or_empty_word_is_one_run() {
        assert_eq!(split_word("reader", false), WordParts::whole("reader"));
        assert_eq!(split_word("", true), WordParts::whole(""));
        assert!(!split_word("", true).has_pivot());
    }
}
