//! Character Table Component
//!
//! One row per character on the current page; clicking a row selects it.

use leptos::prelude::*;

use crate::models::Character;
use crate::store::{store_select, use_viewer_store, ViewerStateStoreFields};

#[component]
pub fn CharacterTable(
    rows: Memo<Vec<Character>>,
) -> impl IntoView {
    let store = use_viewer_store();

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Name"</th>
                    <th>"Species"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|character| character.id
                    children=move |character| {
                        let id = character.id;
                        let is_selected = move || {
                            store.selected().with(|s| s.as_ref().map(|c| c.id) == Some(id))
                        };
                        let row = character.clone();

                        view! {
                            <tr
                                class:selected=is_selected
                                on:click=move |_| store_select(&store, row.clone())
                            >
                                <td>{character.id}</td>
                                <td>{character.name}</td>
                                <td>{character.species}</td>
                                <td>{character.status}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
