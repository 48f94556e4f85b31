//! Filter Form Component
//!
//! Species and status text inputs bound to the store filters.

use leptos::prelude::*;

use crate::config::ViewerConfig;
use crate::store::{
    store_set_species_filter, store_set_status_filter, use_viewer_store, ViewerStateStoreFields,
};

#[component]
pub fn FilterForm() -> impl IntoView {
    let store = use_viewer_store();
    let page_size = use_context::<ViewerConfig>()
        .expect("ViewerConfig should be provided")
        .page_size;

    view! {
        <div class="filter-container">
            <div>
                <label for="species-filter">"Species:"</label>
                <input
                    id="species-filter"
                    type="text"
                    name="species"
                    prop:value=move || store.filters().with(|f| f.species.clone())
                    on:input=move |ev| {
                        store_set_species_filter(&store, event_target_value(&ev), page_size)
                    }
                />
            </div>
            <div>
                <label for="status-filter">"Status:"</label>
                <input
                    id="status-filter"
                    type="text"
                    name="status"
                    prop:value=move || store.filters().with(|f| f.status.clone())
                    on:input=move |ev| {
                        store_set_status_filter(&store, event_target_value(&ev), page_size)
                    }
                />
            </div>
        </div>
    }
}
