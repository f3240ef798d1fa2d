//! Relationship selector ("combobox") model.
//!
//! Forms attach existing entities to the record being edited by display
//! name. The model here is pure: the UI component feeds it the candidate
//! names and the query, and renders whatever comes back.

/// One row of the combobox dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboOption {
    /// An existing entity, addressed by name.
    Candidate(String),
    /// The trailing "Create New <kind>..." row, always present.
    CreateNew,
}

/// Candidates matching `query`, excluding names already selected, with the
/// synthetic create-new row appended. Matching is case-insensitive
/// substring on the candidate name.
pub fn filter_candidates(
    candidates: &[String],
    query: &str,
    selected: &[String],
) -> Vec<ComboOption> {
    let needle = query.to_lowercase();
    let mut options: Vec<ComboOption> = candidates
        .iter()
        .filter(|name| !selected.contains(name))
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .map(ComboOption::Candidate)
        .collect();
    options.push(ComboOption::CreateNew);
    options
}

/// The set of selected pill tokens for one relationship field.
///
/// Single-select keeps at most one token (adding replaces); multi-select
/// accumulates. Only the bare name string is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    single: bool,
    names: Vec<String>,
}

impl Selection {
    pub fn multi() -> Self {
        Self {
            single: false,
            names: Vec::new(),
        }
    }

    pub fn single() -> Self {
        Self {
            single: true,
            names: Vec::new(),
        }
    }

    /// Pre-populate from a stored record's relationship field.
    pub fn with_names(mut self, names: impl IntoIterator<Item = String>) -> Self {
        for name in names {
            self.add(name);
        }
        self
    }

    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() || self.names.contains(&name) {
            return;
        }
        if self.single {
            self.names.clear();
        }
        self.names.push(name);
    }

    pub fn remove(&mut self, name: &str) {
        self.names.retain(|n| n != name);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The single selected name, for single-valued fields.
    pub fn first(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }

    pub fn is_single(&self) -> bool {
        self.single
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let candidates = names(&["The Gilded Hand", "Ashen Order", "Handmaidens"]);
        let options = filter_candidates(&candidates, "hand", &[]);
        assert_eq!(
            options,
            vec![
                ComboOption::Candidate("The Gilded Hand".to_string()),
                ComboOption::Candidate("Handmaidens".to_string()),
                ComboOption::CreateNew,
            ]
        );
    }

    #[test]
    fn filter_excludes_already_selected_names() {
        let candidates = names(&["Alice", "Bob"]);
        let selected = names(&["Alice"]);
        let options = filter_candidates(&candidates, "", &selected);
        assert_eq!(
            options,
            vec![ComboOption::Candidate("Bob".to_string()), ComboOption::CreateNew]
        );
    }

    #[test]
    fn create_new_row_is_present_even_with_no_matches() {
        let options = filter_candidates(&[], "zzz", &[]);
        assert_eq!(options, vec![ComboOption::CreateNew]);
    }

    #[test]
    fn single_select_replaces_the_existing_token() {
        let mut selection = Selection::single();
        selection.add("Alice");
        selection.add("Bob");
        assert_eq!(selection.names(), &["Bob".to_string()]);
        assert_eq!(selection.first(), "Bob");
    }

    #[test]
    fn multi_select_accumulates_tokens() {
        let mut selection = Selection::multi();
        selection.add("Alice");
        selection.add("Bob");
        assert_eq!(selection.names(), &names(&["Alice", "Bob"]));
    }

    #[test]
    fn duplicate_and_empty_names_are_ignored() {
        let mut selection = Selection::multi();
        selection.add("Alice");
        selection.add("Alice");
        selection.add("");
        assert_eq!(selection.names(), &names(&["Alice"]));
    }

    #[test]
    fn removing_a_token_deletes_it() {
        let mut selection = Selection::multi().with_names(names(&["Alice", "Bob"]));
        selection.remove("Alice");
        assert_eq!(selection.names(), &names(&["Bob"]));
        selection.remove("Bob");
        assert_eq!(selection.first(), "");
    }
}
