// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{
    Screen,
    model::{SongDraft, State, helpers::categories},
};
use chordsheet::types::{RhythmPattern, Strum};
use chrono::Utc;
use leptos::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

/// The song form, creating a new song or editing an existing one.
#[component]
pub fn SongForm(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    write_screen: WriteSignal<Screen>,
    song_id: Option<String>,
) -> impl IntoView {
    let initial = song_id
        .as_ref()
        .and_then(|id| state.read_untracked().song(id).cloned());
    let rhythm = RwSignal::new(
        initial
            .as_ref()
            .map(|song| song.rhythm_pattern.clone())
            .unwrap_or_default(),
    );

    let name = NodeRef::new();
    let artist = NodeRef::new();
    let genre = NodeRef::new();
    let category = NodeRef::new();
    let chord_text = NodeRef::new();
    let tablature = NodeRef::new();
    let track_url = NodeRef::new();

    let initial_str = |get: fn(&chordsheet::types::Song) -> Option<&str>| {
        initial
            .as_ref()
            .and_then(|song| get(song))
            .unwrap_or_default()
            .to_owned()
    };

    view! {
        <h2>{if initial.is_some() { "Edit song" } else { "New song" }}</h2>
        <form class="tall" on:submit=move |event| save_song(
            event,
            write_state,
            write_screen,
            song_id.clone(),
            rhythm,
            name.get().unwrap(),
            artist.get().unwrap(),
            genre.get().unwrap(),
            category.get().unwrap(),
            chord_text.get().unwrap(),
            tablature.get().unwrap(),
            track_url.get().unwrap(),
        )>
            <table>
                <tr>
                    <td><label for="name">"Name"</label></td>
                    <td><input type="text" id="name" node_ref=name required=true
                        prop:value=initial_str(|song| Some(song.name.as_str()))/></td>
                </tr>
                <tr>
                    <td><label for="artist">"Artist"</label></td>
                    <td><input type="text" id="artist" node_ref=artist required=true
                        prop:value=initial_str(|song| Some(song.artist.as_str()))/></td>
                </tr>
                <tr>
                    <td><label for="genre">"Genre"</label></td>
                    <td><input type="text" id="genre" node_ref=genre
                        prop:value=initial_str(|song| song.genre.as_deref())/></td>
                </tr>
                <tr>
                    <td><label for="category">"Category"</label></td>
                    <td>
                        <input type="text" id="category" node_ref=category list="category-suggestions"
                            prop:value=initial_str(|song| song.category.as_deref())/>
                        <datalist id="category-suggestions">
                            {move || {
                                let state = state.read();
                                categories(&state).into_iter().map(|category| view! {
                                    <option value=category/>
                                }).collect::<Vec<_>>()
                            }}
                        </datalist>
                    </td>
                </tr>
                <tr>
                    <td><label for="track-url">"Track link"</label></td>
                    <td><input type="url" id="track-url" node_ref=track_url
                        prop:value=initial_str(|song| song.external_track_url.as_deref())/></td>
                </tr>
            </table>
            <label>"Rhythm"</label>
            <div class="button-row">
                <input type="button" value="↓" on:click=move |_| rhythm.update(|rhythm| rhythm.push(Strum::Down))/>
                <input type="button" value="↑" on:click=move |_| rhythm.update(|rhythm| rhythm.push(Strum::Up))/>
                <input type="button" value="Clear" on:click=move |_| rhythm.update(|rhythm| rhythm.clear())/>
            </div>
            <div class="rhythm-display">
                {move || rhythm.read().strums().iter().map(|strum| view! {
                    <span>{strum.glyph().to_string()}</span>
                }).collect::<Vec<_>>()}
            </div>
            <label for="chord-text">"Chords and lyrics"</label>
            <textarea class="tall" id="chord-text" node_ref=chord_text
                placeholder="Tom[C]ando no viol[G]ão"
                prop:value=initial_str(|song| song.chord_text.as_deref())></textarea>
            <label for="tablature">"Tablature"</label>
            <textarea class="tall" id="tablature" node_ref=tablature
                prop:value=initial_str(|song| song.tablature.as_deref())></textarea>
            <div class="button-row">
                <input type="submit" value="Save"/>
                <input type="button" value="Cancel" on:click=move |_| write_screen.set(Screen::Songs)/>
            </div>
        </form>
    }
}

fn save_song(
    event: SubmitEvent,
    write_state: WriteSignal<State>,
    write_screen: WriteSignal<Screen>,
    song_id: Option<String>,
    rhythm: RwSignal<RhythmPattern>,
    name: HtmlInputElement,
    artist: HtmlInputElement,
    genre: HtmlInputElement,
    category: HtmlInputElement,
    chord_text: HtmlTextAreaElement,
    tablature: HtmlTextAreaElement,
    track_url: HtmlInputElement,
) {
    event.prevent_default();

    let draft = SongDraft {
        name: name.value().trim().to_string(),
        artist: artist.value().trim().to_string(),
        genre: optional(name_value(&genre)),
        category: optional(name_value(&category)),
        chord_text: optional_block(chord_text.value()),
        tablature: optional_block(tablature.value()),
        rhythm_pattern: rhythm.get_untracked(),
        external_track_url: optional(name_value(&track_url)),
    };
    if draft.name.is_empty() || draft.artist.is_empty() {
        return;
    }

    let now = Utc::now();
    let mut saved_id = song_id.clone().unwrap_or_default();
    write_state.update(|state| match &song_id {
        Some(id) => {
            state.update_song(id, draft, now);
        }
        None => saved_id = state.add_song(draft, now),
    });
    write_screen.set(Screen::Song { song_id: saved_id });
}

fn name_value(input: &HtmlInputElement) -> String {
    input.value().trim().to_string()
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Like [`optional`], but for multi-line blocks, which keep inner blank
/// lines and only drop leading/trailing ones.
fn optional_block(value: String) -> Option<String> {
    let trimmed = value.trim_matches('\n');
    if trimmed.trim().is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
