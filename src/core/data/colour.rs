#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The fixed palette of colours selectable by name.
///
/// Channel values are 8-bit (0..=255).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NamedColour {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
    Black,
    Orange,
    Purple,
    Pink,
}

impl NamedColour {
    pub const ALL: [NamedColour; 11] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
        Self::White,
        Self::Black,
        Self::Orange,
        Self::Purple,
        Self::Pink,
    ];

    #[must_use]
    pub fn rgb(&self) -> Colour {
        match self {
            Self::Red => Colour { r: 255, g: 0, b: 0 },
            Self::Green => Colour { r: 0, g: 255, b: 0 },
            Self::Blue => Colour { r: 0, g: 0, b: 255 },
            Self::Yellow => Colour {
                r: 255,
                g: 255,
                b: 0,
            },
            Self::Cyan => Colour {
                r: 0,
                g: 255,
                b: 255,
            },
            Self::Magenta => Colour {
                r: 255,
                g: 0,
                b: 255,
            },
            Self::White => Colour {
                r: 255,
                g: 255,
                b: 255,
            },
            Self::Black => Colour { r: 0, g: 0, b: 0 },
            Self::Orange => Colour {
                r: 255,
                g: 165,
                b: 0,
            },
            Self::Purple => Colour {
                r: 128,
                g: 0,
                b: 128,
            },
            Self::Pink => Colour {
                r: 255,
                g: 192,
                b: 203,
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::White => "white",
            Self::Black => "black",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// Case-insensitive lookup. `None` for unknown names; the CLI treats
    /// that as a recoverable input error and reprompts.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_ascii_lowercase();

        Self::ALL.iter().copied().find(|c| c.name() == lowered)
    }
}
