// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{
    Screen,
    model::{
        State,
        helpers::{FilterField, SongFilter, SortOrder, categories, filter_values, filtered_sorted},
    },
};
use leptos::prelude::*;

/// The browsable list of all songs, with filter and sort controls and the
/// category tabs.
#[component]
pub fn SongList(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    write_screen: WriteSignal<Screen>,
    write_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (filter, write_filter) = signal(SongFilter::default());
    let (sort, write_sort) = signal(SortOrder::default());

    view! {
        <div class="filters button-row">
            <select on:change:target=move |event| if let Ok(field) = event.target().value().parse() {
                write_filter.update(|filter| {
                    filter.field = field;
                    filter.value.clear();
                });
            }>
                <option value="all">"All songs"</option>
                <option value="artist">"By artist"</option>
                <option value="genre">"By genre"</option>
                <option value="category">"By category"</option>
            </select>
            {move || {
                let field = filter.read().field;
                (field != FilterField::All).then(|| view! {
                    <select on:change:target=move |event| {
                        write_filter.update(|filter| filter.value = event.target().value());
                    }
                    prop:value=move || filter.read().value.clone()>
                        <option value="">"All"</option>
                        {move || {
                            let state = state.read();
                            filter_values(&state.songs, field).into_iter().map(|value| {
                                view! {
                                    <option value=value.clone()>{value.clone()}</option>
                                }
                            }).collect::<Vec<_>>()
                        }}
                    </select>
                })
            }}
            <select on:change:target=move |event| if let Ok(sort) = event.target().value().parse() {
                write_sort.set(sort);
            }
            prop:value=move || sort.get().to_string()>
                {SortOrder::ALL.into_iter().map(|sort| view! {
                    <option value=sort.to_string()>{sort.label()}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
        <div class="category-tabs">
            <button
                class="category-tab"
                class:active=move || filter.read().category.is_none()
                on:click=move |_| write_filter.update(|filter| filter.category = None)
            >"All"</button>
            {move || {
                let state = state.read();
                categories(&state).into_iter().map(|category| {
                    let selected = category.clone();
                    let shown = category.clone();
                    view! {
                        <button
                            class="category-tab"
                            class:active=move || filter.read().category.as_deref() == Some(category.as_str())
                            on:click=move |_| {
                                let selected = selected.clone();
                                write_filter.update(|filter| filter.category = Some(selected));
                            }
                        >{shown}</button>
                    }
                }).collect::<Vec<_>>()
            }}
            <button class="category-tab add-category" on:click=move |_| add_category(write_state, write_error)>
                "+ Category"
            </button>
        </div>
        {move || {
            let state = state.read();
            let filter = filter.get();
            let songs = filtered_sorted(&state.songs, &filter, sort.get());
            if songs.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"No songs found."</p>
                        <p>"Adjust the filters, or add a new song."</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="song-list">
                    {songs.into_iter().map(|song| {
                        let song_id = song.id.clone();
                        view! {
                            <div class="song-card" on:click=move |_| write_screen.set(Screen::Song { song_id: song_id.clone() })>
                                <h3>{song.name.clone()}</h3>
                                <div class="artist">{format!("by {}", song.artist)}</div>
                                <div class="tags">
                                    {song.genre.clone().map(|genre| view! { <span class="tag">{genre}</span> })}
                                    {song.category.clone().map(|category| view! { <span class="tag">{category}</span> })}
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

/// Prompts for and adds a new custom category.
fn add_category(write_state: WriteSignal<State>, write_error: WriteSignal<Option<String>>) {
    let Ok(Some(name)) = window().prompt_with_message("Name for the new category:") else {
        return;
    };

    write_state.update(|state| match state.add_category(&name) {
        Ok(()) => write_error.set(None),
        Err(e) => write_error.set(Some(e.to_string())),
    });
}
