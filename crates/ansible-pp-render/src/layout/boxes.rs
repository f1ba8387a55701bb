//! Box-drawing character sets for tables and the summary box.

use std::fmt;

/// Which characters frame tables and boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxStyle {
    /// ASCII borders: `+`, `-`, `|`
    #[default]
    Ascii,
    /// Light Unicode box-drawing characters, as drawn by DOS-era UIs:
    /// `┌`, `─`, `┐`, `│`, `└`, `┘`, `├`, `┼`, `┤`, `┬`, `┴`
    Dos,
}

impl BoxStyle {
    pub fn chars(self) -> BoxChars {
        match self {
            BoxStyle::Ascii => BoxChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BoxStyle::Dos => BoxChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoxStyle::Ascii => "ascii",
            BoxStyle::Dos => "dos",
        })
    }
}

/// Box-drawing characters for a [`BoxStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

impl BoxChars {
    /// `count` horizontal characters.
    pub fn rule(&self, count: usize) -> String {
        std::iter::repeat_n(self.horizontal, count).collect()
    }
}
