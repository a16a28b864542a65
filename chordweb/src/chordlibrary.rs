// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{
    Screen,
    chordeditor::ChordEditor,
    model::{ChordDraft, State},
};
use chordsheet::diagram::FingeringGrid;
use leptos::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

/// The chord library manager: the chord list and the add/edit form with the
/// visual fingering editor.
#[component]
pub fn ChordLibrary(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    write_screen: WriteSignal<Screen>,
) -> impl IntoView {
    // ID of the chord being edited, `None` when adding a new one.
    let (editing, write_editing) = signal(None::<String>);
    let (chord_error, write_chord_error) = signal(None::<String>);
    let grid = RwSignal::new(FingeringGrid::default());

    let name = NodeRef::new();
    let diagram = NodeRef::new();

    view! {
        <div class="button-row">
            <input type="button" value="Back" on:click=move |_| write_screen.set(Screen::Songs)/>
        </div>
        <h2>"Chord library"</h2>
        <form class="tall" on:submit=move |event| save_chord(
            event,
            write_state,
            editing,
            write_editing,
            write_chord_error,
            grid,
            name.get().unwrap(),
            diagram.get().unwrap(),
        )>
            <label for="chord-name">"Name"</label>
            <input type="text" id="chord-name" node_ref=name required=true placeholder="Am"/>
            <label for="chord-diagram">"Diagram"</label>
            <textarea id="chord-diagram" node_ref=diagram
                placeholder="Freeform text, or apply the editor below"></textarea>
            <ChordEditor grid/>
            <div class="button-row">
                <input type="button" value="Apply editor to diagram" on:click=move |_| {
                    diagram.get().unwrap().set_value(&grid.with_untracked(|grid| grid.encode_to_text()));
                }/>
                <input type="submit" value=move || if editing.read().is_some() { "Update chord" } else { "Add chord" }/>
                <input type="button" value="Reset" on:click=move |_| reset_form(
                    write_editing,
                    write_chord_error,
                    grid,
                    name.get().unwrap(),
                    diagram.get().unwrap(),
                )/>
            </div>
            <p class="error">{chord_error}</p>
        </form>
        {move || {
            let state_now = state.read();
            if state_now.chords.is_empty() {
                view! { <p class="empty-state">"No chords in the library yet."</p> }.into_any()
            } else {
                view! {
                    <div class="chord-list">
                    {state_now.chords.iter().map(|chord| {
                        let edit_id = chord.id.clone();
                        let delete_id = chord.id.clone();
                        view! {
                            <div class="chord-item">
                                <h4>{chord.name.clone()}</h4>
                                <pre>{chord.diagram.clone()}</pre>
                                <div class="button-row">
                                    <input type="button" value="Edit" on:click=move |_| start_editing(
                                        &edit_id,
                                        state,
                                        write_editing,
                                        grid,
                                        name.get().unwrap(),
                                        diagram.get().unwrap(),
                                    )/>
                                    <input type="button" value="Delete" on:click=move |_| delete_chord(&delete_id, write_state)/>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }
        }}
    }
}

fn save_chord(
    event: SubmitEvent,
    write_state: WriteSignal<State>,
    editing: ReadSignal<Option<String>>,
    write_editing: WriteSignal<Option<String>>,
    write_chord_error: WriteSignal<Option<String>>,
    grid: RwSignal<FingeringGrid>,
    name: HtmlInputElement,
    diagram: HtmlTextAreaElement,
) {
    event.prevent_default();

    let visual = grid.get_untracked();
    let draft = ChordDraft {
        name: name.value().trim().to_string(),
        diagram: diagram.value().trim().to_string(),
        visual_data: (visual != FingeringGrid::default()).then_some(visual),
    };

    let mut result = Ok(());
    write_state.update(|state| {
        result = match editing.get_untracked() {
            Some(id) => state.update_chord(&id, draft),
            None => state.add_chord(draft).map(|_| ()),
        };
    });

    match result {
        Ok(()) => reset_form(write_editing, write_chord_error, grid, name, diagram),
        Err(e) => write_chord_error.set(Some(e.to_string())),
    }
}

/// Loads a chord into the form for editing.
fn start_editing(
    chord_id: &str,
    state: Signal<State>,
    write_editing: WriteSignal<Option<String>>,
    grid: RwSignal<FingeringGrid>,
    name: HtmlInputElement,
    diagram: HtmlTextAreaElement,
) {
    let state = state.read_untracked();
    let Some(chord) = state.chord(chord_id) else {
        return;
    };
    name.set_value(&chord.name);
    diagram.set_value(&chord.diagram);
    grid.set(chord.visual_data.clone().unwrap_or_default());
    write_editing.set(Some(chord_id.to_string()));
}

fn reset_form(
    write_editing: WriteSignal<Option<String>>,
    write_chord_error: WriteSignal<Option<String>>,
    grid: RwSignal<FingeringGrid>,
    name: HtmlInputElement,
    diagram: HtmlTextAreaElement,
) {
    name.set_value("");
    diagram.set_value("");
    grid.set(FingeringGrid::default());
    write_editing.set(None);
    write_chord_error.set(None);
}

fn delete_chord(chord_id: &str, write_state: WriteSignal<State>) {
    if window()
        .confirm_with_message("Delete this chord?")
        .unwrap_or(false)
    {
        write_state.update(|state| state.remove_chord(chord_id));
    }
}
