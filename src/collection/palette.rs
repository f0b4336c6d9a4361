use std::fmt;

/// Opaque display identifier assigned to a collection member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColourToken(String);

impl ColourToken {
    /// Create a token from its textual form (typically `#rrggbb`).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Textual form of the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColourToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ColourToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColourToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Default plot colours, in assignment order.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // cyan
    "#aec7e8", // light blue
    "#ffbb78", // light orange
];

/// Errors building a [`Palette`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A palette needs at least one colour
    #[error("Palette must contain at least one colour")]
    Empty,
}

/// Fixed, ordered set of colour tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<ColourToken>,
}

impl Palette {
    /// Build a palette from an ordered, non-empty list of colours.
    pub fn new<I, T>(colours: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = T>,
        T: Into<ColourToken>,
    {
        let colours: Vec<ColourToken> = colours.into_iter().map(Into::into).collect();
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colours })
    }

    /// Colours in assignment order.
    pub fn colours(&self) -> &[ColourToken] {
        &self.colours
    }

    /// Number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always `false`; palettes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colours: DEFAULT_PALETTE.iter().copied().map(ColourToken::from).collect(),
        }
    }
}
