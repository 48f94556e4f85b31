//! Filter Engine
//!
//! Case-insensitive substring filters over species and status.

use crate::models::Character;

/// Free-text constraints; an empty field places no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub species: String,
    pub status: String,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.species.is_empty() && self.status.is_empty()
    }

    pub fn matches(&self, character: &Character) -> bool {
        contains_folded(&character.species, &self.species)
            && contains_folded(&character.status, &self.status)
    }
}

fn contains_folded(field: &str, needle: &str) -> bool {
    needle.is_empty() || field.to_lowercase().contains(&needle.to_lowercase())
}

/// Characters passing `filters`, in collection order
pub fn apply_filters(characters: &[Character], filters: &Filters) -> Vec<Character> {
    characters
        .iter()
        .filter(|c| filters.matches(c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Origin;

    fn make_character(id: u32, species: &str, status: &str) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            species: species.to_string(),
            status: status.to_string(),
            gender: "Male".to_string(),
            origin: Origin { name: "Earth (C-137)".to_string(), url: None },
            image: String::new(),
        }
    }

    fn sample() -> Vec<Character> {
        vec![
            make_character(1, "Human", "Alive"),
            make_character(2, "Alien", "Dead"),
            make_character(3, "Humanoid", "unknown"),
            make_character(4, "Human", "Dead"),
            make_character(5, "Robot", "Alive"),
        ]
    }

    fn filters(species: &str, status: &str) -> Filters {
        Filters { species: species.to_string(), status: status.to_string() }
    }

    fn ids(characters: &[Character]) -> Vec<u32> {
        characters.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_filters_keep_everything_in_order() {
        let all = sample();
        assert!(Filters::default().is_empty());
        assert_eq!(apply_filters(&all, &Filters::default()), all);
    }

    #[test]
    fn test_species_is_case_insensitive_substring() {
        let all = sample();
        assert_eq!(ids(&apply_filters(&all, &filters("human", ""))), vec![1, 3, 4]);
        assert_eq!(ids(&apply_filters(&all, &filters("HUM", ""))), vec![1, 3, 4]);
        assert_eq!(ids(&apply_filters(&all, &filters("oid", ""))), vec![3]);
    }

    #[test]
    fn test_status_filter() {
        let all = sample();
        assert_eq!(ids(&apply_filters(&all, &filters("", "dead"))), vec![2, 4]);
        assert_eq!(ids(&apply_filters(&all, &filters("", "Alive"))), vec![1, 5]);
    }

    #[test]
    fn test_both_filters_must_match() {
        let all = sample();
        assert_eq!(ids(&apply_filters(&all, &filters("human", "dead"))), vec![4]);
    }

    #[test]
    fn test_inclusion_matches_substring_rule() {
        let all = sample();
        for needle in ["h", "an", "ROBOT", "xyz", "n"] {
            let f = filters(needle, "");
            let kept = apply_filters(&all, &f);
            for c in &all {
                let expected = c.species.to_lowercase().contains(&needle.to_lowercase());
                assert_eq!(kept.contains(c), expected, "species={} needle={}", c.species, needle);
            }
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let all = sample();
        let f = filters("hu", "a");
        let once = apply_filters(&all, &f);
        let twice = apply_filters(&once, &f);
        assert_eq!(once, twice);
        assert_eq!(apply_filters(&all, &f), once);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let all = vec![make_character(1, "Human", "Alive"), make_character(2, "Alien", "unknown")];
        assert!(apply_filters(&all, &filters("", "Dead")).is_empty());
    }
}
