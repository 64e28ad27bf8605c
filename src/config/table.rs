//! Column and sort configuration for the table.

use serde::Deserialize;

use crate::data::Field;

/// Which columns are shown and which carry a sort control.
///
/// Both lists are optional. A missing list behaves like an empty one: no
/// column is shown, or no column is sortable. The order of the names does
/// not affect the display order, which is fixed by [`Field::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableConfig {
    /// Field names to render.
    #[serde(default, alias = "column")]
    pub columns: Option<Vec<String>>,
    /// Field names that get a sort control.
    #[serde(default, alias = "sortable")]
    pub sort: Option<Vec<String>>,
}

impl TableConfig {
    /// Create a configuration from explicit lists.
    pub fn new(columns: Vec<String>, sort: Vec<String>) -> Self {
        Self {
            columns: Some(columns),
            sort: Some(sort),
        }
    }

    /// A configuration with neither list set.
    pub fn empty() -> Self {
        Self {
            columns: None,
            sort: None,
        }
    }

    /// Whether the column for `field` is rendered.
    pub fn shows(&self, field: Field) -> bool {
        contains(&self.columns, field.name())
    }

    /// Whether `field` gets a sort control.
    ///
    /// This only consults the sort list; a sortable field that is not shown
    /// has no header to put the control in.
    pub fn is_sortable(&self, field: Field) -> bool {
        contains(&self.sort, field.name())
    }

    /// Sort names that have no rendered column.
    pub fn dead_sort_keys(&self) -> Vec<&str> {
        self.sort
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|name| !contains(&self.columns, name))
            .collect()
    }

    /// Names in either list that are not known fields.
    pub fn unknown_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .columns
            .iter()
            .chain(self.sort.iter())
            .flatten()
            .map(String::as_str)
            .filter(|name| name.parse::<Field>().is_err())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl Default for TableConfig {
    /// Every known field shown and sortable.
    fn default() -> Self {
        let all: Vec<String> = Field::ALL.iter().map(|f| f.name().to_string()).collect();
        Self::new(all.clone(), all)
    }
}

/// Split a comma-separated list of field names.
pub fn parse_field_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains(list: &Option<Vec<String>>, name: &str) -> bool {
    list.as_ref()
        .is_some_and(|names| names.iter().any(|n| n == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_shows_and_sorts_everything() {
        let config = TableConfig::default();
        for field in Field::ALL {
            assert!(config.shows(field));
            assert!(config.is_sortable(field));
        }
    }

    #[test]
    fn test_empty_config_shows_nothing() {
        let config = TableConfig::empty();
        for field in Field::ALL {
            assert!(!config.shows(field));
            assert!(!config.is_sortable(field));
        }
    }

    #[test]
    fn test_shows_and_sortable() {
        let config = TableConfig::new(names(&["email", "id"]), names(&["id"]));
        assert!(config.shows(Field::Email));
        assert!(config.shows(Field::Id));
        assert!(!config.shows(Field::Status));
        assert!(config.is_sortable(Field::Id));
        assert!(!config.is_sortable(Field::Email));
    }

    #[test]
    fn test_dead_sort_keys() {
        let config = TableConfig::new(names(&["email"]), names(&["email", "gender"]));
        assert_eq!(config.dead_sort_keys(), vec!["gender"]);
        assert!(TableConfig::default().dead_sort_keys().is_empty());
    }

    #[test]
    fn test_unknown_names() {
        let config = TableConfig::new(
            names(&["email", "joiningDate"]),
            names(&["role", "joiningDate"]),
        );
        assert_eq!(config.unknown_names(), vec!["joiningDate", "role"]);
    }

    #[test]
    fn test_deserialize_column_alias() {
        let config: TableConfig =
            toml::from_str("column = [\"email\", \"role\"]\nsort = [\"role\"]").unwrap();
        assert_eq!(config.columns, Some(names(&["email", "role"])));
        assert_eq!(config.sort, Some(names(&["role"])));
    }

    #[test]
    fn test_deserialize_missing_sort() {
        let config: TableConfig = toml::from_str("columns = [\"id\"]").unwrap();
        assert!(config.shows(Field::Id));
        assert_eq!(config.sort, None);
        assert!(!config.is_sortable(Field::Id));
    }

    #[test]
    fn test_parse_field_list() {
        assert_eq!(
            parse_field_list(" id, email ,,status "),
            names(&["id", "email", "status"])
        );
        assert!(parse_field_list("").is_empty());
    }
}
