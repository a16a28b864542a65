// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use chordsheet::{
    sheet::format_sheet,
    types::{Backup, Chord, Song},
};
use clap::Parser;
use eyre::Report;
use log::debug;
use std::{fs::File, io::BufReader, path::PathBuf};

fn main() -> Result<(), Report> {
    pretty_env_logger::init();

    match Args::parse() {
        Args::Print { path, song } => {
            let backup = read_backup(&path)?;
            for entry in &backup.songs {
                if let Some(song) = &song
                    && entry.name.to_lowercase() != song.to_lowercase()
                {
                    continue;
                }
                print_song(entry, &backup.chords);
            }
        }
        Args::Chords { path } => {
            let backup = read_backup(&path)?;
            for chord in &backup.chords {
                print_chord(chord);
            }
        }
        Args::Check { path } => {
            let backup = read_backup(&path)?;
            println!("Valid backup, version {}.", backup.version);
            println!(
                "{} songs, {} chords, {} custom categories.",
                backup.songs.len(),
                backup.chords.len(),
                backup.custom_categories.len(),
            );
            if let Some(export_date) = backup.export_date {
                println!("Exported at {export_date}.");
            }
        }
    }

    Ok(())
}

#[derive(Clone, Debug, Parser)]
enum Args {
    /// Print the songs from the given backup file to standard output.
    Print {
        path: PathBuf,
        /// Only print the song with this name.
        #[arg(long)]
        song: Option<String>,
    },
    /// List the chord library from the given backup file.
    Chords { path: PathBuf },
    /// Check that the given backup file is valid and say what it contains.
    Check { path: PathBuf },
}

fn read_backup(path: &PathBuf) -> Result<Backup, Report> {
    debug!("Reading backup from {}", path.display());
    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}

fn print_song(song: &Song, chords: &[Chord]) {
    println!("= {} =", song.name);
    println!("Artist: {}", song.artist);
    if let Some(genre) = &song.genre {
        println!("Genre: {genre}");
    }
    if let Some(category) = &song.category {
        println!("Category: {category}");
    }
    if !song.rhythm_pattern.is_empty() {
        println!("Rhythm: {}", song.rhythm_pattern);
    }

    if let Some(chord_text) = &song.chord_text {
        println!();
        let known = |name: &str| {
            chords
                .iter()
                .any(|chord| chord.name.to_lowercase() == name.to_lowercase())
        };
        for line in format_sheet(chord_text, known) {
            if line.has_chords() {
                println!("{}", line.chord_row_text().trim_end());
            }
            println!("{}", line.lyric_row);
        }
    }

    if let Some(tablature) = &song.tablature {
        println!();
        println!("{tablature}");
    }
    println!();
}

fn print_chord(chord: &Chord) {
    println!("{}:", chord.name);
    if let Some(grid) = &chord.visual_data {
        println!("{}", grid.encode_to_text());
    } else {
        println!("{}", chord.diagram);
    }
    println!();
}
