//! Pagination Bar Component
//!
//! Previous-5 / numbered window / Next-5 controls.

use leptos::prelude::*;

use crate::config::ViewerConfig;
use crate::pagination::{page_range, SkipDirection};
use crate::store::{store_go_to_page, store_skip_pages, use_viewer_store, ViewerStateStoreFields};

#[component]
pub fn PaginationBar(
    total_pages: Memo<usize>,
) -> impl IntoView {
    let store = use_viewer_store();
    let config = use_context::<ViewerConfig>().expect("ViewerConfig should be provided");
    let (page_size, radius, step) = (config.page_size, config.window_radius, config.skip_step);

    let current = move || store.current_page().get();
    let page_numbers = move || page_range(current(), total_pages.get(), radius).collect::<Vec<_>>();

    view! {
        <div class="pagination">
            <button
                on:click=move |_| store_skip_pages(&store, SkipDirection::Back, step, page_size)
                disabled=move || current() <= 1
            >
                {format!("Previous {}", step)}
            </button>

            <For
                each=page_numbers
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class=move || if current() == page { "active" } else { "" }
                            on:click=move |_| store_go_to_page(&store, page, page_size)
                        >
                            {page}
                        </button>
                    }
                }
            />

            <button
                on:click=move |_| store_skip_pages(&store, SkipDirection::Forward, step, page_size)
                disabled=move || current() >= total_pages.get()
            >
                {format!("Next {}", step)}
            </button>
        </div>
    }
}
