use crate::shared::list_utils::{contains_ci, filter_list, Searchable};
use contracts::domain::a003_customer::Customer;
use std::collections::HashSet;

impl Searchable for Customer {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.group, filter)
            || contains_ci(&self.id, filter)
            || contains_ci(&self.phone, filter)
            || contains_ci(&self.address, filter)
    }
}

/// Headers of the customer table, after the selection column
pub const COLUMNS: [&str; 6] = ["ID", "Name", "Tax Code", "Group", "Phone", "Address"];

/// Cell texts of one row, aligned with [`COLUMNS`]
pub fn row_cells(c: &Customer) -> [String; 6] {
    [
        c.id.clone(),
        c.name.clone(),
        c.tax_code.clone().unwrap_or_default(),
        c.group.clone(),
        c.phone.clone(),
        c.address.clone(),
    ]
}

/// View state of the customer table
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerListState {
    pub search: String,
    /// Selected group tab; `None` is "All"
    pub group: Option<String>,
    pub selected: HashSet<String>,
}

impl CustomerListState {
    /// Rows passing the group tab and the search box
    pub fn visible(&self, rows: &[Customer]) -> Vec<Customer> {
        let in_group: Vec<Customer> = match &self.group {
            Some(group) => rows.iter().filter(|c| &c.group == group).cloned().collect(),
            None => rows.to_vec(),
        };
        filter_list(&in_group, &self.search)
    }

    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// True when every visible row is selected and there is at least one
    pub fn all_selected(&self, visible: &[Customer]) -> bool {
        !visible.is_empty() && visible.iter().all(|c| self.selected.contains(&c.id))
    }

    /// Selects or clears the visible rows, leaving hidden ones untouched
    pub fn select_all(&mut self, visible: &[Customer], checked: bool) {
        for c in visible {
            self.toggle(&c.id, checked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_customer::placeholder_customers;

    fn rows() -> Vec<Customer> {
        let mut rows = placeholder_customers();
        rows[0].name = "Acme Ltd".into();
        rows[1].group = "Wholesale".into();
        rows[2].address = "Acme st. 4, Batumi".into();
        rows
    }

    #[test]
    fn test_id_and_tax_code_have_their_own_columns() {
        let mut rows = rows();
        rows[3].tax_code = Some("405123456".into());

        let placeholder = row_cells(&rows[0]);
        assert_eq!(placeholder[0], "01111111110");
        assert_eq!(placeholder[2], "");

        let with_tax = row_cells(&rows[3]);
        assert_eq!(COLUMNS[0], "ID");
        assert_eq!(with_tax[0], "01111111113");
        assert_eq!(COLUMNS[2], "Tax Code");
        assert_eq!(with_tax[2], "405123456");
    }

    #[test]
    fn test_search_by_id_hits_a_visible_cell() {
        let rows = rows();
        let state = CustomerListState {
            search: "11113".into(),
            ..Default::default()
        };
        let visible = state.visible(&rows);
        assert_eq!(visible.len(), 1);
        assert!(row_cells(&visible[0]).iter().any(|cell| cell.contains("11113")));
    }

    #[test]
    fn test_all_tab_shows_everything() {
        let state = CustomerListState::default();
        assert_eq!(state.visible(&rows()).len(), 8);
    }

    #[test]
    fn test_group_tab() {
        let state = CustomerListState {
            group: Some("Wholesale".into()),
            ..Default::default()
        };
        let visible = state.visible(&rows());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "01111111111");
    }

    #[test]
    fn test_search_combines_with_group() {
        let mut state = CustomerListState {
            search: "ACME".into(),
            ..Default::default()
        };
        assert_eq!(state.visible(&rows()).len(), 2);

        state.group = Some("Wholesale".into());
        assert!(state.visible(&rows()).is_empty());
    }

    #[test]
    fn test_select_all_only_touches_visible_rows() {
        let rows = rows();
        let mut state = CustomerListState {
            group: Some("Group".into()),
            ..Default::default()
        };
        state.toggle("01111111111", true);

        let visible = state.visible(&rows);
        assert!(!state.all_selected(&visible));
        state.select_all(&visible, true);
        assert!(state.all_selected(&visible));
        assert_eq!(state.selected.len(), 8);

        state.select_all(&visible, false);
        assert_eq!(state.selected.len(), 1);
        assert!(state.selected.contains("01111111111"));
    }

    #[test]
    fn test_empty_table_is_never_all_selected() {
        let state = CustomerListState::default();
        assert!(!state.all_selected(&[]));
    }
}
