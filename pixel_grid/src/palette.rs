// palette.rs - Fixed cell color palette

use egui::Color32;

pub const PALETTE_LEN: usize = 8;

/// One of the eight colors a cell can show. `White` is the inactive color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    #[default]
    White,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Cyan,
}

impl CellColor {
    /// Palette in cycling order.
    pub const ALL: [CellColor; PALETTE_LEN] = [
        CellColor::White,
        CellColor::Black,
        CellColor::Red,
        CellColor::Green,
        CellColor::Blue,
        CellColor::Yellow,
        CellColor::Orange,
        CellColor::Cyan,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Next color in the palette, wrapping from `Cyan` back to `White`.
    pub fn next(self) -> CellColor {
        Self::ALL[(self.index() + 1) % PALETTE_LEN]
    }

    pub fn color32(self) -> Color32 {
        match self {
            CellColor::White  => Color32::from_rgb(255, 255, 255),
            CellColor::Black  => Color32::from_rgb(0, 0, 0),
            CellColor::Red    => Color32::from_rgb(255, 0, 0),
            CellColor::Green  => Color32::from_rgb(0, 255, 0),
            CellColor::Blue   => Color32::from_rgb(0, 0, 255),
            CellColor::Yellow => Color32::from_rgb(255, 255, 0),
            CellColor::Orange => Color32::from_rgb(255, 200, 0),
            CellColor::Cyan   => Color32::from_rgb(0, 255, 255),
        }
    }
}
