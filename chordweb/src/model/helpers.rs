// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Filtering, sorting and category helpers for the song list.

use super::State;
use chordsheet::types::Song;
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// Which song field the value filter applies to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FilterField {
    #[default]
    All,
    Artist,
    Genre,
    Category,
}

impl FilterField {
    fn song_value(self, song: &Song) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Artist => Some(&song.artist),
            Self::Genre => song.genre.as_deref(),
            Self::Category => song.category.as_deref(),
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Artist => "artist",
            Self::Genre => "genre",
            Self::Category => "category",
        })
    }
}

impl FromStr for FilterField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "artist" => Ok(Self::Artist),
            "genre" => Ok(Self::Genre),
            "category" => Ok(Self::Category),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

/// The whole filter state of the song list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SongFilter {
    pub field: FilterField,
    /// Selected value for `field`; empty selects every value.
    pub value: String,
    /// Category tab restriction; `None` is the "all" tab.
    pub category: Option<String>,
}

impl SongFilter {
    /// Returns whether the song passes both the category tab and the value
    /// filter. Matching is case-insensitive equality.
    pub fn matches(&self, song: &Song) -> bool {
        if let Some(category) = &self.category
            && !song
                .category
                .as_deref()
                .is_some_and(|song_category| equal_ignoring_case(song_category, category))
        {
            return false;
        }
        if self.value.is_empty() {
            return true;
        }
        match self.field.song_value(song) {
            None => true,
            Some(value) => equal_ignoring_case(value, &self.value),
        }
    }
}

/// Order of the song list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    ArtistAsc,
    ArtistDesc,
    Recent,
}

impl SortOrder {
    pub const ALL: [Self; 5] = [
        Self::NameAsc,
        Self::NameDesc,
        Self::ArtistAsc,
        Self::ArtistDesc,
        Self::Recent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name A-Z",
            Self::NameDesc => "Name Z-A",
            Self::ArtistAsc => "Artist A-Z",
            Self::ArtistDesc => "Artist Z-A",
            Self::Recent => "Most recent",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::ArtistAsc => "artist-asc",
            Self::ArtistDesc => "artist-desc",
            Self::Recent => "recent",
        })
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "artist-asc" => Ok(Self::ArtistAsc),
            "artist-desc" => Ok(Self::ArtistDesc),
            "recent" => Ok(Self::Recent),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Unknown option {0:?}")]
pub struct ParseEnumError(String);

/// Returns the songs passing the filter, in the given order.
pub fn filtered_sorted<'a>(
    songs: &'a [Song],
    filter: &SongFilter,
    sort: SortOrder,
) -> Vec<&'a Song> {
    let mut songs: Vec<&Song> = songs.iter().filter(|song| filter.matches(song)).collect();
    match sort {
        SortOrder::NameAsc => songs.sort_by_key(|song| song.name.to_lowercase()),
        SortOrder::NameDesc => {
            songs.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
        }
        SortOrder::ArtistAsc => songs.sort_by_key(|song| song.artist.to_lowercase()),
        SortOrder::ArtistDesc => {
            songs.sort_by(|a, b| b.artist.to_lowercase().cmp(&a.artist.to_lowercase()))
        }
        SortOrder::Recent => songs.sort_by_key(|song| std::cmp::Reverse(song.created_at)),
    }
    songs
}

/// Distinct values of the given field across the songs, sorted, for the
/// filter value select.
pub fn filter_values(songs: &[Song], field: FilterField) -> Vec<String> {
    songs
        .iter()
        .filter_map(|song| field.song_value(song))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The category tabs: custom categories plus every category in use on a
/// song, sorted.
pub fn categories(state: &State) -> Vec<String> {
    let mut categories: BTreeSet<String> = state.custom_categories.iter().cloned().collect();
    categories.extend(state.songs.iter().filter_map(|song| song.category.clone()));
    categories.into_iter().collect()
}

fn equal_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SongDraft;
    use chrono::DateTime;

    fn state_with_songs() -> State {
        let mut state = State::default();
        for (i, (name, artist, genre, category)) in [
            ("Wave", "Tom Jobim", Some("Bossa"), Some("Calmas")),
            ("Alvorada", "Cartola", Some("Samba"), None),
            ("Trem-Bala", "Ana Vilela", None, Some("calmas")),
        ]
        .into_iter()
        .enumerate()
        {
            state.add_song(
                SongDraft {
                    name: name.to_string(),
                    artist: artist.to_string(),
                    genre: genre.map(str::to_string),
                    category: category.map(str::to_string),
                    ..Default::default()
                },
                DateTime::from_timestamp(1700000000 + i as i64, 0).unwrap(),
            );
        }
        state
    }

    fn names(songs: Vec<&Song>) -> Vec<&str> {
        songs.into_iter().map(|song| song.name.as_str()).collect()
    }

    #[test]
    fn default_filter_passes_everything_sorted_by_name() {
        let state = state_with_songs();
        assert_eq!(
            names(filtered_sorted(
                &state.songs,
                &SongFilter::default(),
                SortOrder::default()
            )),
            vec!["Alvorada", "Trem-Bala", "Wave"]
        );
    }

    #[test]
    fn value_filters_match_ignoring_case() {
        let state = state_with_songs();
        let filter = SongFilter {
            field: FilterField::Artist,
            value: "tom jobim".to_string(),
            category: None,
        };
        assert_eq!(
            names(filtered_sorted(&state.songs, &filter, SortOrder::NameAsc)),
            vec!["Wave"]
        );
    }

    #[test]
    fn category_tab_restricts_ignoring_case() {
        let state = state_with_songs();
        let filter = SongFilter {
            category: Some("Calmas".to_string()),
            ..Default::default()
        };
        assert_eq!(
            names(filtered_sorted(&state.songs, &filter, SortOrder::NameAsc)),
            vec!["Trem-Bala", "Wave"]
        );
    }

    #[test]
    fn sort_orders() {
        let state = state_with_songs();
        let all = SongFilter::default();
        assert_eq!(
            names(filtered_sorted(&state.songs, &all, SortOrder::NameDesc)),
            vec!["Wave", "Trem-Bala", "Alvorada"]
        );
        assert_eq!(
            names(filtered_sorted(&state.songs, &all, SortOrder::ArtistAsc)),
            vec!["Trem-Bala", "Alvorada", "Wave"]
        );
        assert_eq!(
            names(filtered_sorted(&state.songs, &all, SortOrder::Recent)),
            vec!["Trem-Bala", "Alvorada", "Wave"]
        );
    }

    #[test]
    fn filter_values_are_distinct_and_sorted() {
        let state = state_with_songs();
        assert_eq!(
            filter_values(&state.songs, FilterField::Genre),
            vec!["Bossa".to_string(), "Samba".to_string()]
        );
    }

    #[test]
    fn categories_union_custom_and_song_categories() {
        let mut state = state_with_songs();
        state.add_category("Festa junina").unwrap();
        assert_eq!(
            categories(&state),
            vec![
                "Calmas".to_string(),
                "Festa junina".to_string(),
                "calmas".to_string()
            ]
        );
    }

    #[test]
    fn select_values_round_trip() {
        for sort in SortOrder::ALL {
            assert_eq!(sort.to_string().parse::<SortOrder>(), Ok(sort));
        }
        assert_eq!("artist".parse::<FilterField>(), Ok(FilterField::Artist));
        assert!("nope".parse::<FilterField>().is_err());
    }
}
