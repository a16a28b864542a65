// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Backup export and import.
//!
//! A backup holds every collection; importing one replaces everything,
//! wholesale. Files that fail to parse (including files missing the
//! required `songs` or `chords` keys) are rejected before any replacement,
//! so a bad file never loses data.

use crate::model::State;
use chordsheet::types::Backup;
use chrono::Utc;
use gloo_file::{Blob, File, FileList, ObjectUrl, futures::read_as_text};
use gloo_utils::document;
use leptos::{ev::Targeted, prelude::*};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlAnchorElement, HtmlInputElement};

/// Exports every collection to a downloaded backup file.
pub fn export(state: Signal<State>, write_error: WriteSignal<Option<String>>) {
    let backup = state.read_untracked().backup(Utc::now());
    let contents = serde_json::to_string_pretty(&backup).unwrap();
    if let Err(e) = download(&contents, "repertoire-backup.json") {
        write_error.set(Some(format!("{e:?}")));
    } else {
        write_error.set(None);
    }
}

/// Triggers a download of the given contents through a temporary anchor.
fn download(contents: &str, filename: &str) -> Result<(), JsValue> {
    let blob = Blob::new_with_options(contents, Some("application/json"));
    let url = ObjectUrl::from(blob);
    let anchor = document()
        .create_element("a")?
        .unchecked_into::<HtmlAnchorElement>();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

/// Imports the backup file picked in the import file input.
pub async fn file_selected(
    event: Targeted<Event, HtmlInputElement>,
    write_state: WriteSignal<State>,
    write_output: WriteSignal<Option<String>>,
    write_error: WriteSignal<Option<String>>,
) {
    let files = FileList::from(event.target().files().unwrap());
    let Some(file) = files.first() else {
        return;
    };
    import_file(file, write_state, write_output, write_error).await;
}

async fn import_file(
    file: &File,
    write_state: WriteSignal<State>,
    write_output: WriteSignal<Option<String>>,
    write_error: WriteSignal<Option<String>>,
) {
    let text = read_as_text(file).await.unwrap();
    match serde_json::from_str::<Backup>(&text) {
        Ok(backup) => {
            write_error.set(None);
            write_output.set(Some(format!(
                "Imported {} songs and {} chords from {}",
                backup.songs.len(),
                backup.chords.len(),
                file.name(),
            )));
            write_state.update(|state| state.replace_all(backup));
        }
        Err(e) => {
            // Nothing is replaced; the collections stay as they were.
            gloo_console::error!(e.to_string());
            write_error.set(Some(format!("Invalid backup file: {e}")));
        }
    }
}
