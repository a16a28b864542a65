// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use chordsheet::diagram::{Cell, FRET_WINDOW, Finger, FingeringGrid, Preset, STRING_COUNT};
use leptos::prelude::*;

/// The visual fingering editor: a 6×4 grid of cells, per-string open/muted
/// toggles and the start-fret offset, editing the grid signal in place.
#[component]
pub fn ChordEditor(grid: RwSignal<FingeringGrid>) -> impl IntoView {
    view! {
        <div class="chord-editor">
            <label>
                "Start fret"
                <input type="number" min="0"
                    prop:value=move || grid.read().start_fret.to_string()
                    on:change:target=move |event| if let Ok(start_fret) = event.target().value().parse() {
                        grid.update(|grid| grid.set_start_fret(start_fret));
                    }/>
            </label>
            <table class="fret-grid">
                {(0..STRING_COUNT).map(|string| view! {
                    <tr>
                        <th>{format!("Corda {}", string + 1)}</th>
                        <td>
                            <button type="button" class="string-status" on:click=move |_| grid.update(|grid| {
                                grid.set_string_status(string, grid.string_status[string].toggled());
                            })>
                                {move || grid.read().string_status[string].symbol().to_string()}
                            </button>
                        </td>
                        {(0..FRET_WINDOW).map(|fret| {
                            let cell = Cell { string: string as u8, fret: fret as u8 };
                            view! {
                                <td>
                                    <button type="button" class="cell" on:click=move |_| grid.update(|grid| {
                                        grid.set_finger(cell, next_finger(grid.finger_at(cell)));
                                    })>
                                        {move || grid.read().finger_at(cell).map(|finger| finger.label().to_string()).unwrap_or_default()}
                                    </button>
                                </td>
                            }
                        }).collect::<Vec<_>>()}
                    </tr>
                }).collect::<Vec<_>>()}
            </table>
            <div class="preview">
                {move || grid.with(|grid| diagram_pins(grid, Preset::Editor))}
            </div>
        </div>
    }
}

/// Renders a grid's pins and status row, positioned for the given preset.
///
/// Both the editor preview and the read-only chord popup use this; only the
/// preset's vertical offsets differ.
pub fn diagram_pins(grid: &FingeringGrid, preset: Preset) -> impl IntoView + use<> {
    view! {
        <div class="diagram" class:compact={preset == Preset::Popup}>
            {(grid.start_fret > 0).then(|| view! {
                <div class="start-fret">{format!("{}ª casa", grid.start_fret)}</div>
            })}
            <div class="diagram-pins">
                {grid.pin_positions(FRET_WINDOW, preset).into_iter().map(|pin| view! {
                    <span class="pin" style=format!("left: {:.1}%; top: {}px;", pin.x * 100.0, pin.y)>
                        {pin.finger.label()}
                    </span>
                }).collect::<Vec<_>>()}
            </div>
            <div class="string-status-row">
                {grid.string_status.iter().map(|status| view! {
                    <span>{status.symbol().to_string()}</span>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Clicking a cell cycles through the finger labels and back to empty.
fn next_finger(current: Option<Finger>) -> Option<Finger> {
    match current {
        None => Some(Finger::Index),
        Some(Finger::Index) => Some(Finger::Middle),
        Some(Finger::Middle) => Some(Finger::Ring),
        Some(Finger::Ring) => Some(Finger::Little),
        Some(Finger::Little) => Some(Finger::Barre),
        Some(Finger::Barre) => None,
    }
}
