// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! The visual chord-diagram codec.
//!
//! A [`FingeringGrid`] is the structured form of a chord diagram: a start
//! fret, a sparse map of finger placements keyed by `(string, fret)` cells
//! and a per-string open/muted status. It encodes to the compact textual
//! diagram used as a chord's fallback representation and renders to
//! positioned pins for the two diagram views.

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter, Write},
    num::ParseIntError,
    str::FromStr,
};
use thiserror::Error;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Number of frets shown in a diagram window.
pub const FRET_WINDOW: usize = 4;

/// A `(string, fret)` cell of the diagram grid.
///
/// Serialized as the string `"<string>-<fret>"` so it can key a JSON object.
/// The ordering is string-major, which is also the order the encoder emits.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Cell {
    /// String index, 0 (high E, the top row of a diagram) to 5.
    pub string: u8,
    /// Fret offset within the displayed window, 0 to 3.
    pub fret: u8,
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.string, self.fret)
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((string, fret)) = s.split_once('-') else {
            return Err(ParseCellError::MissingSeparator);
        };
        Ok(Self {
            string: string.parse()?,
            fret: fret.parse()?,
        })
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}

impl TryFrom<String> for Cell {
    type Error = ParseCellError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseCellError {
    #[error("Missing separator")]
    MissingSeparator,
    #[error("{0}")]
    ParseInt(#[from] ParseIntError),
}

/// The label on a placed finger.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Finger {
    #[serde(rename = "1")]
    Index,
    #[serde(rename = "2")]
    Middle,
    #[serde(rename = "3")]
    Ring,
    #[serde(rename = "4")]
    Little,
    /// A barre (or anything else that is not a single numbered finger).
    #[serde(rename = "P")]
    Barre,
}

impl Finger {
    pub fn label(self) -> &'static str {
        match self {
            Self::Index => "1",
            Self::Middle => "2",
            Self::Ring => "3",
            Self::Little => "4",
            Self::Barre => "P",
        }
    }
}

impl Display for Finger {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether an unfretted string rings open or is not to be played.
///
/// Independent of finger placements: muting a string does not clear them.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum StringStatus {
    #[default]
    #[serde(rename = "o")]
    Open,
    #[serde(rename = "x")]
    Muted,
}

impl StringStatus {
    pub fn symbol(self) -> char {
        match self {
            Self::Open => 'o',
            Self::Muted => 'x',
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Muted,
            Self::Muted => Self::Open,
        }
    }
}

/// Which diagram view a pin rendering is for.
///
/// The editable grid and the read-only popup lay their rows out differently,
/// so each has its own fixed table of per-string vertical offsets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Preset {
    Editor,
    Popup,
}

impl Preset {
    fn string_offsets(self) -> [f32; STRING_COUNT] {
        match self {
            Self::Editor => [14.0, 42.0, 70.0, 98.0, 126.0, 154.0],
            Self::Popup => [10.0, 30.0, 50.0, 70.0, 90.0, 110.0],
        }
    }
}

/// One finger placement positioned for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pin {
    pub string: u8,
    pub fret: u8,
    pub finger: Finger,
    /// Horizontal centre as a fraction of the diagram width.
    pub x: f32,
    /// Vertical centre in pixels, from the preset's per-string offsets.
    pub y: f32,
}

/// Structured representation of a chord diagram.
///
/// Cells are expected to lie within [`STRING_COUNT`] strings and the
/// [`FRET_WINDOW`]; the mutators do not check this, callers supplying
/// coordinates from a rendered grid never produce anything else.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingeringGrid {
    /// Fret-board offset of the display window; 0 starts at the nut.
    #[serde(default)]
    pub start_fret: u8,
    #[serde(default)]
    pub fingers: BTreeMap<Cell, Finger>,
    #[serde(default)]
    pub string_status: [StringStatus; STRING_COUNT],
}

impl FingeringGrid {
    /// Places, replaces or (with `None`) clears the finger at the given cell.
    pub fn set_finger(&mut self, cell: Cell, finger: Option<Finger>) {
        match finger {
            Some(finger) => {
                self.fingers.insert(cell, finger);
            }
            None => {
                self.fingers.remove(&cell);
            }
        }
    }

    /// Sets one string's open/muted status, leaving its placements alone.
    pub fn set_string_status(&mut self, string: usize, status: StringStatus) {
        self.string_status[string] = status;
    }

    pub fn set_start_fret(&mut self, start_fret: u8) {
        self.start_fret = start_fret;
    }

    pub fn finger_at(&self, cell: Cell) -> Option<Finger> {
        self.fingers.get(&cell).copied()
    }

    pub fn has_placements(&self) -> bool {
        !self.fingers.is_empty()
    }

    /// Encodes the grid as the compact textual diagram.
    ///
    /// A start-fret line when the window does not begin at the nut, then one
    /// line per string with placements listing its `[fret:finger]` pairs in
    /// fret order, then the six status symbols:
    ///
    /// ```text
    /// 2ª casa
    /// Corda 1: [0:1]
    /// Status: x x x x x x
    /// ```
    pub fn encode_to_text(&self) -> String {
        let mut lines = Vec::new();
        if self.start_fret > 0 {
            lines.push(format!("{}ª casa", self.start_fret));
        }
        for string in 0..STRING_COUNT as u8 {
            let mut pairs = String::new();
            for (cell, finger) in &self.fingers {
                if cell.string == string {
                    write!(pairs, "[{}:{finger}]", cell.fret).unwrap();
                }
            }
            if !pairs.is_empty() {
                lines.push(format!("Corda {}: {pairs}", string + 1));
            }
        }
        let status = self
            .string_status
            .iter()
            .map(|status| status.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("Status: {status}"));
        lines.join("\n")
    }

    /// Positions every placement inside the fret window for display.
    ///
    /// The horizontal position is the centre of the fret as a fraction of
    /// the diagram width; the vertical position comes from the preset's
    /// per-string offset table. Cells outside the window yield no pin.
    pub fn pin_positions(&self, window: usize, preset: Preset) -> Vec<Pin> {
        let offsets = preset.string_offsets();
        self.fingers
            .iter()
            .filter(|(cell, _)| {
                (cell.string as usize) < STRING_COUNT && (cell.fret as usize) < window
            })
            .map(|(cell, &finger)| Pin {
                string: cell.string,
                fret: cell.fret,
                finger,
                x: (cell.fret as f32 + 0.5) / window as f32,
                y: offsets[cell.string as usize],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(string: u8, fret: u8) -> Cell {
        Cell { string, fret }
    }

    #[test]
    fn cell_round_trips_through_its_string_form() {
        let parsed: Cell = "4-2".parse().unwrap();
        assert_eq!(parsed, cell(4, 2));
        assert_eq!(parsed.to_string(), "4-2");
        assert_eq!(
            "42".parse::<Cell>(),
            Err(ParseCellError::MissingSeparator)
        );
        assert!("a-2".parse::<Cell>().is_err());
    }

    #[test]
    fn empty_muted_grid_encodes_to_just_the_status_line() {
        let grid = FingeringGrid {
            string_status: [StringStatus::Muted; STRING_COUNT],
            ..Default::default()
        };
        assert_eq!(grid.encode_to_text(), "Status: x x x x x x");
    }

    #[test]
    fn encoding_matches_the_documented_example() {
        let mut grid = FingeringGrid {
            string_status: [StringStatus::Muted; STRING_COUNT],
            ..Default::default()
        };
        grid.set_start_fret(2);
        grid.set_finger(cell(0, 0), Some(Finger::Index));
        assert_eq!(
            grid.encode_to_text(),
            "2ª casa\nCorda 1: [0:1]\nStatus: x x x x x x"
        );
    }

    #[test]
    fn encoding_lists_pairs_in_fret_order_per_string() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(1, 3), Some(Finger::Little));
        grid.set_finger(cell(1, 0), Some(Finger::Index));
        grid.set_finger(cell(4, 1), Some(Finger::Barre));
        assert_eq!(
            grid.encode_to_text(),
            "Corda 2: [0:1][3:4]\nCorda 5: [1:P]\nStatus: o o o o o o"
        );
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(2, 1), Some(Finger::Middle));
        grid.set_string_status(5, StringStatus::Muted);
        assert_eq!(grid.encode_to_text(), grid.encode_to_text());
    }

    #[test]
    fn clearing_a_cell_restores_the_previous_grid() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(3, 2), Some(Finger::Ring));
        let before = grid.clone();
        grid.set_finger(cell(0, 1), Some(Finger::Index));
        grid.set_finger(cell(0, 1), None);
        assert_eq!(grid, before);
        assert!(grid.has_placements());
    }

    #[test]
    fn setting_a_cell_overwrites_it() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(0, 1), Some(Finger::Index));
        grid.set_finger(cell(0, 1), Some(Finger::Barre));
        assert_eq!(grid.finger_at(cell(0, 1)), Some(Finger::Barre));
    }

    #[test]
    fn muting_a_string_keeps_its_placements() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(2, 1), Some(Finger::Middle));
        grid.set_string_status(2, StringStatus::Muted);
        assert_eq!(grid.finger_at(cell(2, 1)), Some(Finger::Middle));
        assert_eq!(grid.string_status[2], StringStatus::Muted);
    }

    #[test]
    fn pins_are_centred_within_their_frets() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(0, 0), Some(Finger::Index));
        grid.set_finger(cell(5, 3), Some(Finger::Little));

        let pins = grid.pin_positions(FRET_WINDOW, Preset::Popup);
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].x, 0.125);
        assert_eq!(pins[0].y, 10.0);
        assert_eq!(pins[1].x, 0.875);
        assert_eq!(pins[1].y, 110.0);
    }

    #[test]
    fn pins_outside_the_window_are_dropped() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(1, 2), Some(Finger::Middle));
        grid.set_finger(cell(1, 3), Some(Finger::Ring));
        let pins = grid.pin_positions(3, Preset::Editor);
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].fret, 2);
    }

    #[test]
    fn the_two_presets_use_different_offsets() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(cell(1, 1), Some(Finger::Index));
        let editor = grid.pin_positions(FRET_WINDOW, Preset::Editor);
        let popup = grid.pin_positions(FRET_WINDOW, Preset::Popup);
        assert_eq!(editor[0].x, popup[0].x);
        assert_ne!(editor[0].y, popup[0].y);
    }

    #[test]
    fn grids_round_trip_through_json() {
        let mut grid = FingeringGrid::default();
        grid.set_start_fret(3);
        grid.set_finger(cell(1, 2), Some(Finger::Barre));
        grid.set_string_status(0, StringStatus::Muted);

        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.contains("\"1-2\":\"P\""));
        assert_eq!(serde_json::from_str::<FingeringGrid>(&json).unwrap(), grid);
    }
}
