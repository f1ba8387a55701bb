//! Measure-aware padding and truncation.
//!
//! These are the two text primitives every layout is built from. Both take the
//! run's [`Measure`] explicitly so that padding and chopping agree with the
//! widths recorded in [`Stats`](crate::Stats).

use std::borrow::Cow;

use crate::measure::Measure;

/// Marker appended to a line that had to be chopped.
pub const CHOP_MARK: char = '▒';

/// The chop marker does not fit in the requested width.
///
/// This only happens when the marker is wider than the whole budget, e.g. the
/// three-byte `▒` under [`Measure::Bytes`] with a budget of one or two. It
/// signals a configuration mistake, not bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("can't fit a chop marker of width {marker_width} into a line width of {max_width}")]
pub struct ChopError {
    pub marker_width: usize,
    pub max_width: usize,
}

/// Pads `s` on the left (right-aligns it) to `width`.
///
/// Strings already at or over `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{pad_left, Measure};
///
/// assert_eq!(pad_left("42", 5, Measure::Chars), "   42");
/// assert_eq!(pad_left("hello", 3, Measure::Chars), "hello");
/// ```
pub fn pad_left(s: &str, width: usize, measure: Measure) -> String {
    let fill = width.saturating_sub(measure.width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.extend(std::iter::repeat_n(' ', fill));
    out.push_str(s);
    out
}

/// Pads `s` on the right (left-aligns it) to `width`.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{pad_right, Measure};
///
/// assert_eq!(pad_right("42", 5, Measure::Chars), "42   ");
/// assert_eq!(pad_right("日本", 6, Measure::Monospace), "日本  ");
/// ```
pub fn pad_right(s: &str, width: usize, measure: Measure) -> String {
    let fill = width.saturating_sub(measure.width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Chops `s` to `max_width`, replacing the tail with `mark`.
///
/// - A `max_width` of 0 always yields an empty string.
/// - A string that already fits is returned unchanged (borrowed).
/// - Otherwise leading units are kept while their width stays within
///   `max_width - width(mark)`, and `mark` is appended.
///
/// # Errors
///
/// Returns [`ChopError`] when the marker alone is wider than `max_width`.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{chop, Measure, CHOP_MARK};
///
/// assert_eq!(chop("12345", 4, CHOP_MARK, Measure::Chars).unwrap(), "123▒");
/// assert_eq!(chop("12345", 80, CHOP_MARK, Measure::Chars).unwrap(), "12345");
/// assert_eq!(chop("12345", 0, CHOP_MARK, Measure::Chars).unwrap(), "");
/// ```
pub fn chop(
    s: &str,
    max_width: usize,
    mark: char,
    measure: Measure,
) -> Result<Cow<'_, str>, ChopError> {
    if max_width == 0 {
        return Ok(Cow::Borrowed(""));
    }
    if measure.width(s) <= max_width {
        return Ok(Cow::Borrowed(s));
    }

    let marker_width = check_mark(mark, max_width, measure)?;
    let end = measure.prefix_len(s, max_width - marker_width);
    let mut out = String::with_capacity(end + mark.len_utf8());
    out.push_str(&s[..end]);
    out.push(mark);
    Ok(Cow::Owned(out))
}

/// Checks that `mark` fits in a `max_width` budget and returns its width.
///
/// A budget of 0 accepts any marker, since chopping to 0 never appends one.
/// Layouts call this before writing anything so a bad width fails up front.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{check_mark, Measure, CHOP_MARK};
///
/// assert_eq!(check_mark(CHOP_MARK, 2, Measure::Chars), Ok(1));
/// assert!(check_mark(CHOP_MARK, 2, Measure::Bytes).is_err());
/// ```
pub fn check_mark(mark: char, max_width: usize, measure: Measure) -> Result<usize, ChopError> {
    let mut buf = [0u8; 4];
    let marker_width = measure.width(mark.encode_utf8(&mut buf));
    if max_width > 0 && marker_width > max_width {
        return Err(ChopError {
            marker_width,
            max_width,
        });
    }
    Ok(marker_width)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn measure_strategy() -> impl Strategy<Value = Measure> {
        prop_oneof![Just(Measure::Chars), Just(Measure::Monospace)]
    }

    proptest! {
        #[test]
        fn chop_never_exceeds_max_width(
            s in "\\PC{0,40}",
            max_width in 1usize..60,
            measure in measure_strategy(),
        ) {
            let chopped = chop(&s, max_width, CHOP_MARK, measure).unwrap();
            prop_assert!(
                measure.width(&chopped) <= max_width,
                "{:?} chopped to {} has width {}",
                s, max_width, measure.width(&chopped)
            );
        }

        #[test]
        fn chop_to_zero_is_empty(s in "\\PC{0,40}", measure in measure_strategy()) {
            prop_assert_eq!(chop(&s, 0, CHOP_MARK, measure).unwrap(), "");
        }

        #[test]
        fn chop_is_identity_when_it_fits(
            s in "\\PC{0,40}",
            slack in 0usize..10,
            measure in measure_strategy(),
        ) {
            let max_width = measure.width(&s) + slack;
            prop_assume!(max_width > 0);
            prop_assert_eq!(chop(&s, max_width, CHOP_MARK, measure).unwrap(), s.as_str());
        }

        #[test]
        fn chopped_lines_end_with_mark(
            s in "[a-z ]{10,40}",
            max_width in 1usize..10,
        ) {
            let chopped = chop(&s, max_width, CHOP_MARK, Measure::Chars).unwrap();
            prop_assert!(chopped.ends_with(CHOP_MARK));
        }

        #[test]
        fn padding_reaches_exact_width(
            s in "[a-z]{0,10}",
            width in 10usize..30,
        ) {
            prop_assert_eq!(Measure::Chars.width(&pad_left(&s, width, Measure::Chars)), width);
            prop_assert_eq!(Measure::Chars.width(&pad_right(&s, width, Measure::Chars)), width);
        }
    }
}
