//! Character Details Component
//!
//! Read-only panel for the selected character. Renders nothing until a row
//! has been clicked.

use leptos::prelude::*;

use crate::models::Character;
use crate::store::{use_viewer_store, ViewerStateStoreFields};

#[component]
pub fn CharacterDetails() -> impl IntoView {
    let store = use_viewer_store();

    move || store.selected().get().map(|character| view! { <DetailsCard character=character /> })
}

/// Labelled rows shown under the heading, copied from the record as-is
pub fn detail_fields(character: &Character) -> [(&'static str, String); 4] {
    [
        ("Status:", character.status.clone()),
        ("Species:", character.species.clone()),
        ("Gender:", character.gender.clone()),
        ("Origin:", character.origin.name.clone()),
    ]
}

#[component]
fn DetailsCard(character: Character) -> impl IntoView {
    let rows = detail_fields(&character);
    let name = character.name.clone();

    view! {
        <div class="character-details">
            <h3>{character.name}</h3>
            <img src=character.image alt=name />
            {rows
                .into_iter()
                .map(|(label, value)| view! { <p><strong>{label}</strong> " " {value}</p> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Origin;

    #[test]
    fn test_detail_fields_are_verbatim() {
        let character = Character {
            id: 118,
            name: "Evil Morty".to_string(),
            species: "Human".to_string(),
            status: "Alive".to_string(),
            gender: "Male".to_string(),
            origin: Origin { name: "unknown".to_string(), url: Some(String::new()) },
            image: "https://rickandmortyapi.com/api/character/avatar/118.jpeg".to_string(),
        };

        let fields = detail_fields(&character);
        assert_eq!(
            fields,
            [
                ("Status:", "Alive".to_string()),
                ("Species:", "Human".to_string()),
                ("Gender:", "Male".to_string()),
                ("Origin:", "unknown".to_string()),
            ]
        );
    }

    #[test]
    fn test_detail_fields_keep_case_and_whitespace() {
        let character = Character {
            id: 7,
            name: " Abradolf Lincler ".to_string(),
            species: "huMAN ".to_string(),
            status: "unknown".to_string(),
            gender: "Genderless".to_string(),
            origin: Origin { name: "Earth (Replacement Dimension)".to_string(), url: None },
            image: String::new(),
        };

        let fields = detail_fields(&character);
        assert_eq!(fields[1].1, "huMAN ");
        assert_eq!(fields[3].1, "Earth (Replacement Dimension)");
    }
}
