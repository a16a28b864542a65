// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

pub mod helpers;

use chordsheet::{
    diagram::FingeringGrid,
    types::{BACKUP_VERSION, Backup, Chord, RhythmPattern, Song},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The whole application state, held in a single local-storage signal.
///
/// The UI layer owns the only mutable reference; every mutation goes through
/// the methods here. Timestamps are passed in by the caller so the model
/// itself stays a plain value.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub chords: Vec<Chord>,
    #[serde(default)]
    pub custom_categories: Vec<String>,
}

impl State {
    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    /// Adds a new song and returns its ID.
    pub fn add_song(&mut self, draft: SongDraft, now: DateTime<Utc>) -> String {
        let id = next_id(self.songs.iter().map(|song| song.id.as_str()));
        self.songs.push(Song {
            id: id.clone(),
            name: draft.name,
            artist: draft.artist,
            genre: draft.genre,
            category: draft.category,
            chord_text: draft.chord_text,
            tablature: draft.tablature,
            rhythm_pattern: draft.rhythm_pattern,
            external_track_url: draft.external_track_url,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Replaces the contents of the song with the given ID, keeping its ID
    /// and creation time.
    ///
    /// Returns false if there is no such song.
    pub fn update_song(&mut self, id: &str, draft: SongDraft, now: DateTime<Utc>) -> bool {
        let Some(song) = self.songs.iter_mut().find(|song| song.id == id) else {
            return false;
        };
        song.name = draft.name;
        song.artist = draft.artist;
        song.genre = draft.genre;
        song.category = draft.category;
        song.chord_text = draft.chord_text;
        song.tablature = draft.tablature;
        song.rhythm_pattern = draft.rhythm_pattern;
        song.external_track_url = draft.external_track_url;
        song.updated_at = now;
        true
    }

    pub fn remove_song(&mut self, id: &str) {
        self.songs.retain(|song| song.id != id);
    }

    pub fn chord(&self, id: &str) -> Option<&Chord> {
        self.chords.iter().find(|chord| chord.id == id)
    }

    /// Looks a chord up by name, ignoring case.
    pub fn find_chord(&self, name: &str) -> Option<&Chord> {
        self.chords
            .iter()
            .find(|chord| chord.name.to_lowercase() == name.to_lowercase())
    }

    /// Adds a new chord to the library and returns its ID.
    ///
    /// Names must be unique in the library ignoring case; a clash is
    /// reported, never renamed or merged.
    pub fn add_chord(&mut self, draft: ChordDraft) -> Result<String, ChordError> {
        let draft = draft.normalized()?;
        if self.find_chord(&draft.name).is_some() {
            return Err(ChordError::DuplicateName(draft.name));
        }
        let id = next_id(self.chords.iter().map(|chord| chord.id.as_str()));
        self.chords.push(Chord {
            id: id.clone(),
            name: draft.name,
            diagram: draft.diagram,
            visual_data: draft.visual_data,
        });
        Ok(id)
    }

    /// Replaces the contents of the chord with the given ID.
    pub fn update_chord(&mut self, id: &str, draft: ChordDraft) -> Result<(), ChordError> {
        let draft = draft.normalized()?;
        if self
            .chords
            .iter()
            .any(|chord| chord.id != id && chord.name.to_lowercase() == draft.name.to_lowercase())
        {
            return Err(ChordError::DuplicateName(draft.name));
        }
        if let Some(chord) = self.chords.iter_mut().find(|chord| chord.id == id) {
            chord.name = draft.name;
            chord.diagram = draft.diagram;
            chord.visual_data = draft.visual_data;
        }
        Ok(())
    }

    pub fn remove_chord(&mut self, id: &str) {
        self.chords.retain(|chord| chord.id != id);
    }

    /// Adds a custom category for the song form and the category tabs.
    pub fn add_category(&mut self, name: &str) -> Result<(), CategoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::Empty);
        }
        if self.custom_categories.iter().any(|existing| existing == name) {
            return Err(CategoryError::Duplicate(name.to_string()));
        }
        self.custom_categories.push(name.to_string());
        Ok(())
    }

    /// Snapshots the collections as a backup.
    pub fn backup(&self, export_date: DateTime<Utc>) -> Backup {
        Backup {
            songs: self.songs.clone(),
            chords: self.chords.clone(),
            custom_categories: self.custom_categories.clone(),
            export_date: Some(export_date),
            version: BACKUP_VERSION.to_string(),
        }
    }

    /// Replaces every collection with the backup's contents, wholesale.
    ///
    /// Validation happens when the backup is parsed; by the time one exists
    /// here it replaces everything, with no merging.
    pub fn replace_all(&mut self, backup: Backup) {
        self.songs = backup.songs;
        self.chords = backup.chords;
        self.custom_categories = backup.custom_categories;
    }
}

/// The editable fields of a song, as gathered from the song form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SongDraft {
    pub name: String,
    pub artist: String,
    pub genre: Option<String>,
    pub category: Option<String>,
    pub chord_text: Option<String>,
    pub tablature: Option<String>,
    pub rhythm_pattern: RhythmPattern,
    pub external_track_url: Option<String>,
}

/// The editable fields of a chord, as gathered from the chord form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChordDraft {
    pub name: String,
    pub diagram: String,
    pub visual_data: Option<FingeringGrid>,
}

impl ChordDraft {
    /// Fills a missing textual diagram from the visual data and checks the
    /// required fields.
    fn normalized(mut self) -> Result<Self, ChordError> {
        if self.diagram.is_empty()
            && let Some(grid) = &self.visual_data
        {
            self.diagram = grid.encode_to_text();
        }
        if self.name.is_empty() || self.diagram.is_empty() {
            return Err(ChordError::MissingFields);
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ChordError {
    #[error("There is already a chord named {0:?}")]
    DuplicateName(String),
    #[error("A chord needs both a name and a diagram")]
    MissingFields,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category {0:?} already exists")]
    Duplicate(String),
    #[error("Category names must not be empty")]
    Empty,
}

/// Returns an unused ID, one past the highest numeric ID in use.
///
/// Non-numeric IDs (none are generated here, but imports may hold anything)
/// are skipped rather than rejected.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    (ids.filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or_default()
        + 1)
    .to_string()
}
