use std::fmt;

/// Occupancy of a single board cell: a black disc, a white disc, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscColor {
    None,
    Black,
    White,
}

impl DiscColor {
    /// Get the opposing color. `None` has no opponent and maps to itself.
    pub fn opponent(self) -> DiscColor {
        match self {
            DiscColor::Black => DiscColor::White,
            DiscColor::White => DiscColor::Black,
            DiscColor::None => DiscColor::None,
        }
    }

    /// True for Black and White, false for an empty cell.
    pub fn is_disc(self) -> bool {
        self != DiscColor::None
    }

    /// Get the color name for display
    pub fn name(self) -> &'static str {
        match self {
            DiscColor::None => "None",
            DiscColor::Black => "Black",
            DiscColor::White => "White",
        }
    }
}

impl fmt::Display for DiscColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
