// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! The song and chord data model, and the JSON backup format.
//!
//! Persisted JSON uses camelCase field names and epoch-millisecond
//! timestamps, so backups written by earlier versions of the app load
//! unchanged.

use crate::diagram::FingeringGrid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// A song of the repertoire.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    pub name: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Lyrics with inline `[ChordName]` annotations, one line per lyric line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord_text: Option<String>,
    /// Free-text tablature block, displayed verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablature: Option<String>,
    #[serde(default, skip_serializing_if = "RhythmPattern::is_empty")]
    pub rhythm_pattern: RhythmPattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_track_url: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// A chord of the personal chord library.
///
/// Names are unique across the library ignoring case; enforcing that is the
/// caller's job at the point of add/edit.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub id: String,
    pub name: String,
    /// Textual diagram, freeform or produced by
    /// [`FingeringGrid::encode_to_text`].
    pub diagram: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_data: Option<FingeringGrid>,
}

/// A single strum direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strum {
    Down,
    Up,
}

impl Strum {
    pub fn glyph(self) -> char {
        match self {
            Self::Down => '↓',
            Self::Up => '↑',
        }
    }
}

impl Display for Strum {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl TryFrom<char> for Strum {
    type Error = ParseRhythmError;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        match glyph {
            '↓' => Ok(Self::Down),
            '↑' => Ok(Self::Up),
            _ => Err(ParseRhythmError(glyph)),
        }
    }
}

/// An ordered strumming pattern, rendered in entry order.
///
/// Serialized as the bare glyph string (`"↓↓↑"`), the form the rhythm
/// builder buttons produce.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct RhythmPattern(Vec<Strum>);

impl RhythmPattern {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, strum: Strum) {
        self.0.push(strum);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn strums(&self) -> &[Strum] {
        &self.0
    }
}

impl Display for RhythmPattern {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for strum in &self.0 {
            write!(f, "{strum}")?;
        }
        Ok(())
    }
}

impl FromStr for RhythmPattern {
    type Err = ParseRhythmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.chars().map(Strum::try_from).collect::<Result<_, _>>()?,
        ))
    }
}

impl From<RhythmPattern> for String {
    fn from(pattern: RhythmPattern) -> Self {
        pattern.to_string()
    }
}

impl TryFrom<String> for RhythmPattern {
    type Error = ParseRhythmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("Unrecognized strum symbol {0:?}")]
pub struct ParseRhythmError(pub char);

/// Version written into backups produced by this code.
pub const BACKUP_VERSION: &str = "1.0";

/// The backup file format.
///
/// `songs` and `chords` are required: a file missing either key fails to
/// parse, and the caller rejects it before replacing anything. The other
/// fields are tolerated when absent so older backups import cleanly.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub songs: Vec<Song>,
    pub chords: Vec<Chord>,
    #[serde(default)]
    pub custom_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default = "default_backup_version")]
    pub version: String,
}

fn default_backup_version() -> String {
    BACKUP_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{Cell, Finger};

    fn song(id: &str, name: &str) -> Song {
        Song {
            id: id.to_string(),
            name: name.to_string(),
            artist: "Someone".to_string(),
            genre: None,
            category: None,
            chord_text: None,
            tablature: None,
            rhythm_pattern: RhythmPattern::default(),
            external_track_url: None,
            created_at: DateTime::from_timestamp(1700000000, 0).unwrap(),
            updated_at: DateTime::from_timestamp(1700000000, 0).unwrap(),
        }
    }

    #[test]
    fn rhythm_patterns_round_trip() {
        let pattern: RhythmPattern = "↓↓↑".parse().unwrap();
        assert_eq!(
            pattern.strums(),
            [Strum::Down, Strum::Down, Strum::Up]
        );
        assert_eq!(pattern.to_string(), "↓↓↑");
    }

    #[test]
    fn unknown_strum_symbols_are_rejected() {
        assert_eq!("↓x↑".parse::<RhythmPattern>(), Err(ParseRhythmError('x')));
    }

    #[test]
    fn songs_serialize_with_the_persisted_field_names() {
        let mut song = song("1", "Alvorada");
        song.chord_text = Some("Al[C]vorada".to_string());
        song.rhythm_pattern = "↓↑".parse().unwrap();
        let json = serde_json::to_string(&song).unwrap();
        assert!(json.contains("\"chordText\":\"Al[C]vorada\""));
        assert!(json.contains("\"rhythmPattern\":\"↓↑\""));
        assert!(json.contains("\"createdAt\":1700000000000"));
        assert!(!json.contains("genre"));
        assert_eq!(serde_json::from_str::<Song>(&json).unwrap(), song);
    }

    #[test]
    fn chords_carry_optional_visual_data() {
        let mut grid = FingeringGrid::default();
        grid.set_finger(Cell { string: 0, fret: 1 }, Some(Finger::Index));
        let chord = Chord {
            id: "1".to_string(),
            name: "Am".to_string(),
            diagram: grid.encode_to_text(),
            visual_data: Some(grid),
        };
        let json = serde_json::to_string(&chord).unwrap();
        assert!(json.contains("\"visualData\""));
        assert_eq!(serde_json::from_str::<Chord>(&json).unwrap(), chord);
    }

    #[test]
    fn backups_missing_required_collections_fail_to_parse() {
        assert!(serde_json::from_str::<Backup>(r#"{"songs": []}"#).is_err());
        assert!(serde_json::from_str::<Backup>(r#"{"chords": []}"#).is_err());
        assert!(serde_json::from_str::<Backup>(r#"{}"#).is_err());
    }

    #[test]
    fn minimal_backups_get_defaults() {
        let backup =
            serde_json::from_str::<Backup>(r#"{"songs": [], "chords": []}"#).unwrap();
        assert_eq!(backup.custom_categories, Vec::<String>::new());
        assert_eq!(backup.export_date, None);
        assert_eq!(backup.version, BACKUP_VERSION);
    }

    #[test]
    fn backups_round_trip() {
        let backup = Backup {
            songs: vec![song("1", "Alvorada")],
            chords: vec![],
            custom_categories: vec!["Serestas".to_string()],
            export_date: Some(DateTime::from_timestamp(1700000000, 0).unwrap()),
            version: BACKUP_VERSION.to_string(),
        };
        let json = serde_json::to_string_pretty(&backup).unwrap();
        assert!(json.contains("\"customCategories\""));
        assert!(json.contains("\"exportDate\""));
        assert_eq!(serde_json::from_str::<Backup>(&json).unwrap(), backup);
    }
}
