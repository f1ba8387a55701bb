//! Display-width strategies.
//!
//! Every width decision in this crate (statistics, padding, chopping, table
//! fitting) goes through a single [`Measure`]. A run picks one measure and
//! threads it everywhere; mixing measures within one rendering pass breaks
//! the column arithmetic.
//!
//! | Measure | Width of `"日本"` | Width of `"e\u{301}"` |
//! |---------|-------------------|------------------------|
//! | [`Measure::Bytes`] | 6 | 3 |
//! | [`Measure::Chars`] | 2 | 2 |
//! | [`Measure::Monospace`] | 4 | 1 |

use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// How the display width of a string is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Measure {
    /// Length of the UTF-8 encoding.
    Bytes,
    /// Number of Unicode scalar values.
    #[default]
    Chars,
    /// Terminal cells: wide East Asian characters take 2, combining marks 0.
    Monospace,
}

impl Measure {
    /// All measures, in the order they are listed in help output.
    pub const ALL: [Measure; 3] = [Measure::Bytes, Measure::Chars, Measure::Monospace];

    /// Returns the display width of `s` under this measure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ansible_pp_render::Measure;
    ///
    /// assert_eq!(Measure::Bytes.width("♪"), 3);
    /// assert_eq!(Measure::Chars.width("♪"), 1);
    /// assert_eq!(Measure::Monospace.width("日本"), 4);
    /// ```
    pub fn width(self, s: &str) -> usize {
        match self {
            Measure::Bytes => s.len(),
            Measure::Chars => s.chars().count(),
            Measure::Monospace => s.graphemes(true).map(UnicodeWidthStr::width).sum(),
        }
    }

    /// Byte length of the longest prefix of `s` whose width stays within `limit`.
    ///
    /// The prefix is built from whole units: chars for `Bytes` and `Chars`,
    /// extended grapheme clusters for `Monospace`, so a cut never splits a
    /// cluster or a UTF-8 sequence.
    pub(crate) fn prefix_len(self, s: &str, limit: usize) -> usize {
        match self {
            Measure::Monospace => fit_units(s.graphemes(true), limit, self),
            Measure::Bytes | Measure::Chars => fit_units(
                s.char_indices().map(|(i, c)| &s[i..i + c.len_utf8()]),
                limit,
                self,
            ),
        }
    }

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Measure::Bytes => "bytes",
            Measure::Chars => "chars",
            Measure::Monospace => "monospace",
        }
    }
}

fn fit_units<'a>(units: impl Iterator<Item = &'a str>, limit: usize, measure: Measure) -> usize {
    let mut used = 0;
    let mut end = 0;

    for unit in units {
        let w = measure.width(unit);
        if used + w > limit {
            break;
        }
        used += w;
        end += unit.len();
    }

    end
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown measure name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown width measure `{0}` (expected bytes, chars or monospace)")]
pub struct UnknownMeasure(pub String);

impl FromStr for Measure {
    type Err = UnknownMeasure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bytes" => Ok(Measure::Bytes),
            "chars" | "runes" => Ok(Measure::Chars),
            "monospace" | "mono" => Ok(Measure::Monospace),
            _ => Err(UnknownMeasure(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_ascii_is_uniform() {
        for m in Measure::ALL {
            assert_eq!(m.width("hello"), 5, "{m}");
            assert_eq!(m.width(""), 0, "{m}");
        }
    }

    #[test]
    fn test_width_bytes() {
        assert_eq!(Measure::Bytes.width("[♪, ♪♪]"), 13);
        assert_eq!(Measure::Bytes.width("▒"), 3);
    }

    #[test]
    fn test_width_chars() {
        assert_eq!(Measure::Chars.width("[♪, ♪♪]"), 7);
        assert_eq!(Measure::Chars.width("日本語"), 3);
    }

    #[test]
    fn test_width_monospace_wide() {
        assert_eq!(Measure::Monospace.width("日本語"), 6);
        assert_eq!(Measure::Monospace.width("a日b"), 4);
    }

    #[test]
    fn test_width_monospace_combining() {
        // "e" + COMBINING ACUTE ACCENT is one cell
        assert_eq!(Measure::Monospace.width("e\u{301}"), 1);
        assert_eq!(Measure::Chars.width("e\u{301}"), 2);
    }

    #[test]
    fn test_prefix_len_stops_before_limit() {
        assert_eq!(Measure::Chars.prefix_len("abcdef", 3), 3);
        assert_eq!(Measure::Chars.prefix_len("abc", 10), 3);
        assert_eq!(Measure::Chars.prefix_len("abc", 0), 0);
    }

    #[test]
    fn test_prefix_len_never_splits_wide_char() {
        // "a日" takes 3 cells; the next "本" would overflow a limit of 4
        let s = "a日本";
        let end = Measure::Monospace.prefix_len(s, 4);
        assert_eq!(&s[..end], "a日");
    }

    #[test]
    fn test_prefix_len_bytes_respects_char_boundaries() {
        let s = "♪♪";
        assert_eq!(Measure::Bytes.prefix_len(s, 4), 3);
        assert_eq!(Measure::Bytes.prefix_len(s, 2), 0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("bytes".parse::<Measure>().unwrap(), Measure::Bytes);
        assert_eq!("Chars".parse::<Measure>().unwrap(), Measure::Chars);
        assert_eq!("mono".parse::<Measure>().unwrap(), Measure::Monospace);
        assert!("cells".parse::<Measure>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for m in Measure::ALL {
            assert_eq!(m.to_string().parse::<Measure>().unwrap(), m);
        }
    }
}
