// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

mod chordeditor;
mod chordlibrary;
mod import_export;
mod model;
mod songdetail;
mod songform;
mod songlist;

use crate::{
    chordlibrary::ChordLibrary,
    import_export::{export, file_selected},
    model::State,
    songdetail::SongDetail,
    songform::SongForm,
    songlist::SongList,
};
use leptos::{prelude::*, server::codee::string::JsonSerdeCodec, task::spawn_local};
use leptos_use::storage::use_local_storage;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

/// Which screen of the app is showing.
///
/// Screens are process-local (there is no routing), so switching is just a
/// signal write.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Screen {
    /// The browsable song list.
    Songs,
    /// One song's detail view.
    Song { song_id: String },
    /// The song form, editing an existing song or creating a new one.
    EditSong { song_id: Option<String> },
    /// The chord library manager.
    Chords,
}

#[component]
fn App() -> impl IntoView {
    let (state, write_state, _) = use_local_storage::<State, JsonSerdeCodec>("repertoire");
    let (screen, write_screen) = signal(Screen::Songs);
    let (output, write_output) = signal(None);
    let (error, write_error) = signal(None);

    view! {
        <div id="app">
        <header>
        <h1>"Chordweb"</h1>
        <div class="button-row">
        <input type="button" value="New song" on:click=move |_| write_screen.set(Screen::EditSong { song_id: None })/>
        <input type="button" value="Chord library" on:click=move |_| write_screen.set(Screen::Chords)/>
        <input type="button" value="Export backup" on:click=move |_| export(state, write_error)/>
        <label class="import-label">
        "Import backup "
        <input type="file" accept=".json" on:change:target=move |event| spawn_local(file_selected(event, write_state, write_output, write_error))/>
        </label>
        </div>
        <div>
        <p id="output">{ output }</p>
        <p id="error">{ error }</p>
        </div>
        </header>
        {move || match screen.get() {
            Screen::Songs => view! {
                <SongList state write_state write_screen write_error/>
            }.into_any(),
            Screen::Song { song_id } => view! {
                <SongDetail state write_state write_screen song_id/>
            }.into_any(),
            Screen::EditSong { song_id } => view! {
                <SongForm state write_state write_screen song_id/>
            }.into_any(),
            Screen::Chords => view! {
                <ChordLibrary state write_state write_screen/>
            }.into_any(),
        }}
        </div>
    }
}
