//! Character Viewer App
//!
//! Top-level coordinator: owns the store, starts the collection load and
//! wires the filter, table, details and pagination components together.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::CharacterApi;
use crate::components::{CharacterDetails, CharacterTable, FilterForm, PaginationBar};
use crate::config::ViewerConfig;
use crate::error::LoadError;
use crate::loader::{load_collection, CancelToken};
use crate::pagination::{page_slice, total_pages};
use crate::store::{
    filtered_characters, store_fail_loading, store_finish_loading, LoadStatus, ViewerState,
    ViewerStateStoreFields, ViewerStore,
};

#[component]
pub fn App(config: ViewerConfig) -> impl IntoView {
    let store: ViewerStore = Store::new(ViewerState::default());
    let page_size = config.page_size;

    provide_context(store);
    provide_context(config.clone());

    // Load the collection once; teardown cancels before the next page request
    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });
    spawn_local(async move {
        let api = CharacterApi::new(config.api_base_url.clone());
        log::info!(
            "[APP] Loading {} characters from {}",
            config.target_count,
            config.api_base_url
        );
        match load_collection(&api, config.target_count, &cancel).await {
            Ok(characters) => store_finish_loading(&store, characters),
            Err(LoadError::Cancelled) => log::debug!("[APP] Load cancelled"),
            Err(e) => {
                log::error!("[APP] Failed to load characters: {}", e);
                store_fail_loading(&store, e.to_string());
            }
        }
    });

    let filtered = Memo::new(move |_| filtered_characters(&store));
    let total = Memo::new(move |_| filtered.with(|f| total_pages(f.len(), page_size)));
    let visible = Memo::new(move |_| {
        let page = store.current_page().get();
        filtered.with(|f| page_slice(f, page, page_size).to_vec())
    });

    let is_loading = move || store.status().with(|s| *s == LoadStatus::Loading);
    let failure = move || match store.status().get() {
        LoadStatus::Failed(message) => Some(message),
        _ => None,
    };

    view! {
        <div class="container">
            <h1>"Rick and Morty Characters"</h1>

            <FilterForm />

            {move || if is_loading() {
                view! { <p class="loading">"Loading characters..."</p> }.into_any()
            } else if filtered.with(|f| f.is_empty()) {
                view! {
                    <p class="empty">"No characters match the filter."</p>
                    {failure().map(|message| view! {
                        <p class="load-error">
                            {format!("Failed to load characters: {}", message)}
                        </p>
                    })}
                }.into_any()
            } else {
                view! { <CharacterTable rows=visible /> }.into_any()
            }}

            <CharacterDetails />

            <Show when=move || { total.get() > 0 }>
                <PaginationBar total_pages=total />
            </Show>
        </div>
    }
}
