// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{Screen, chordeditor::diagram_pins, model::State};
use chordsheet::{
    diagram::Preset,
    embed::spotify_embed_url,
    sheet::{Fragment, NBSP, format_sheet},
    types::Chord,
};
use leptos::prelude::*;

/// One song's detail view: metadata, rhythm, the stacked chord/lyric sheet,
/// tablature and the embedded player. Known chords in the sheet open the
/// chord popup.
#[component]
pub fn SongDetail(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    write_screen: WriteSignal<Screen>,
    song_id: String,
) -> impl IntoView {
    let (popup_chord, write_popup_chord) = signal(None::<Chord>);

    let id = song_id.clone();
    move || {
        let state_now = state.read();
        let Some(song) = state_now.song(&id) else {
            return view! { <p>"Song not found."</p> }.into_any();
        };

        let sheet = song
            .chord_text
            .as_deref()
            .map(|text| format_sheet(text, |name| state_now.find_chord(name).is_some()));

        let edit_id = id.clone();
        let delete_id = id.clone();

        view! {
            <div class="button-row">
                <input type="button" value="Back" on:click=move |_| write_screen.set(Screen::Songs)/>
                <input type="button" value="Edit" on:click=move |_| write_screen.set(Screen::EditSong {
                    song_id: Some(edit_id.clone()),
                })/>
                <input type="button" value="Delete" on:click=move |_| delete_song(&delete_id, write_state, write_screen)/>
            </div>
            <h2>{song.name.clone()}</h2>
            <div class="meta">
                <span>{format!("Artist: {}", song.artist)}</span>
                {song.genre.clone().map(|genre| view! { <span>{format!("Genre: {genre}")}</span> })}
                {song.category.clone().map(|category| view! { <span>{format!("Category: {category}")}</span> })}
            </div>
            {(!song.rhythm_pattern.is_empty()).then(|| view! {
                <div class="section">
                    <h3>"Rhythm"</h3>
                    <div class="rhythm-display">
                        {song.rhythm_pattern.strums().iter().map(|strum| view! {
                            <span>{strum.glyph().to_string()}</span>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            })}
            {sheet.map(|sheet| view! {
                <div class="section">
                    <h3>"Chords"</h3>
                    <div class="chord-lyrics">
                        {sheet.into_iter().map(|line| view! {
                            <div class="chord-line-group">
                                {line.has_chords().then(|| view! {
                                    <div class="chord-line">
                                        {line.chord_row.iter().map(|fragment| {
                                            fragment_view(fragment, state, write_popup_chord)
                                        }).collect::<Vec<_>>()}
                                    </div>
                                })}
                                <div class="lyric-line">{line.lyric_row.clone()}</div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            })}
            {song.tablature.clone().map(|tablature| view! {
                <div class="section">
                    <h3>"Tablature"</h3>
                    <pre class="tab-display">{tablature}</pre>
                </div>
            })}
            {song.external_track_url.as_deref().and_then(spotify_embed_url).map(|embed_url| view! {
                <div class="section">
                    <h3>"Listen"</h3>
                    <iframe attr:foo="bar" src=embed_url width="100%" height="380"
                        allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"></iframe>
                </div>
            })}
            {move || popup_chord.get().map(|chord| view! {
                <div class="chord-popup" on:click=move |_| write_popup_chord.set(None)>
                    <div class="chord-popup-content">
                        <h3>{chord.name.clone()}</h3>
                        {chord.visual_data.as_ref().map(|grid| diagram_pins(grid, Preset::Popup))}
                        <pre>{chord.diagram.clone()}</pre>
                    </div>
                </div>
            })}
        }
        .into_any()
    }
}

/// Renders one run of a chord row: filler spaces, or a chord name, clickable
/// when the library knows it.
fn fragment_view(
    fragment: &Fragment,
    state: Signal<State>,
    write_popup_chord: WriteSignal<Option<Chord>>,
) -> AnyView {
    match fragment {
        Fragment::Filler(width) => {
            view! { <span>{NBSP.to_string().repeat(*width)}</span> }.into_any()
        }
        Fragment::Chord { name, known } => {
            if *known {
                let popup_name = name.clone();
                view! {
                    <span class="chord clickable" on:click=move |_| {
                        let chord = state.read_untracked().find_chord(&popup_name).cloned();
                        write_popup_chord.set(chord);
                    }>{name.clone()}</span>
                }
                .into_any()
            } else {
                view! { <span class="chord">{name.clone()}</span> }.into_any()
            }
        }
    }
}

fn delete_song(song_id: &str, write_state: WriteSignal<State>, write_screen: WriteSignal<Screen>) {
    if window()
        .confirm_with_message("Delete this song?")
        .unwrap_or(false)
    {
        write_state.update(|state| state.remove_song(song_id));
        write_screen.set(Screen::Songs);
    }
}
