//! Viewer State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each concern
//! (loading, filters, page, selection) is its own field; the helpers below
//! are the only writers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{apply_filters, Filters};
use crate::models::Character;
use crate::pagination::{clamp_page, skip, total_pages, SkipDirection};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct ViewerState {
    pub status: LoadStatus,
    /// The loaded collection; written once per session
    pub characters: Vec<Character>,
    pub filters: Filters,
    /// 1-indexed
    pub current_page: usize,
    /// Last clicked row, kept across filter and page changes
    pub selected: Option<Character>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            status: LoadStatus::Loading,
            characters: Vec::new(),
            filters: Filters::default(),
            current_page: 1,
            selected: None,
        }
    }
}

/// Type alias for the store
pub type ViewerStore = Store<ViewerState>;

/// Get the viewer store from context
pub fn use_viewer_store() -> ViewerStore {
    expect_context::<ViewerStore>()
}

/// Total pages once `filters` are applied to `characters`
pub fn filtered_total_pages(
    characters: &[Character],
    filters: &Filters,
    page_size: usize,
) -> usize {
    let count = if filters.is_empty() {
        characters.len()
    } else {
        characters.iter().filter(|c| filters.matches(c)).count()
    };
    total_pages(count, page_size)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_finish_loading(store: &ViewerStore, characters: Vec<Character>) {
    store.characters().set(characters);
    store.status().set(LoadStatus::Ready);
}

pub fn store_fail_loading(store: &ViewerStore, message: String) {
    store.status().set(LoadStatus::Failed(message));
}

/// Replace the filters and pull the current page back into range
pub fn store_set_filters(store: &ViewerStore, filters: Filters, page_size: usize) {
    let total = store
        .characters()
        .with_untracked(|all| filtered_total_pages(all, &filters, page_size));
    store.filters().set(filters);
    store.current_page().update(|page| *page = clamp_page(*page, total));
}

pub fn store_set_species_filter(store: &ViewerStore, species: String, page_size: usize) {
    let mut filters = store.filters().get_untracked();
    filters.species = species;
    store_set_filters(store, filters, page_size);
}

pub fn store_set_status_filter(store: &ViewerStore, status: String, page_size: usize) {
    let mut filters = store.filters().get_untracked();
    filters.status = status;
    store_set_filters(store, filters, page_size);
}

fn current_total_pages(store: &ViewerStore, page_size: usize) -> usize {
    let filters = store.filters().get_untracked();
    store
        .characters()
        .with_untracked(|all| filtered_total_pages(all, &filters, page_size))
}

/// Jump to `page`, clamped to the pages that exist; inert when there are none
pub fn store_go_to_page(store: &ViewerStore, page: usize, page_size: usize) {
    let total = current_total_pages(store, page_size);
    if total == 0 {
        return;
    }
    store.current_page().set(clamp_page(page, total));
}

pub fn store_skip_pages(
    store: &ViewerStore,
    direction: SkipDirection,
    step: usize,
    page_size: usize,
) {
    let total = current_total_pages(store, page_size);
    store.current_page().update(|page| *page = skip(*page, direction, step, total));
}

pub fn store_select(store: &ViewerStore, character: Character) {
    store.selected().set(Some(character));
}

/// Filtered view of the collection, tracked on characters and filters
pub fn filtered_characters(store: &ViewerStore) -> Vec<Character> {
    let filters = store.filters().get();
    store.characters().with(|all| apply_filters(all, &filters))
}
