//! Client-side derivations over already-fetched lists: search, sort,
//! pagination. Pure functions; nothing here re-fetches.

use std::cmp::Ordering;

/// Row shape shared by table queries and CSV export.
pub trait Tabular {
    /// Column names, in display order.
    fn columns() -> &'static [&'static str];

    /// Cell value for `column`. `None` means the cell is absent: absent
    /// cells sort last and export as empty fields.
    fn value(&self, column: &str) -> Option<String>;
}

/// Sort direction for a [`TableQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A search/sort/page request applied to a fetched list.
///
/// Defaults to the identity query: no search, no sort, no pagination.
#[derive(Debug, Clone, Default)]
pub struct TableQuery {
    /// Case-insensitive substring matched against every cell value.
    pub search: Option<String>,
    /// Column to sort by, with direction. Absent cells always sort last,
    /// regardless of direction.
    pub sort: Option<(String, SortDirection)>,
    /// 1-based page number; only meaningful with `page_size`.
    pub page: usize,
    /// Rows per page. `None` disables pagination.
    pub page_size: Option<usize>,
}

impl TableQuery {
    /// The identity query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter rows by a case-insensitive substring across all cells.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sort by `column` in the given direction.
    #[must_use]
    pub fn with_sort(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some((column.into(), direction));
        self
    }

    /// Select one page of `page_size` rows. Pages are 1-based.
    #[must_use]
    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = Some(page_size);
        self
    }

    /// Apply search, then sort, then pagination to `rows`, returning the
    /// derived list. The input is untouched.
    pub fn apply<T: Tabular + Clone>(&self, rows: &[T]) -> Vec<T> {
        let mut out: Vec<T> = match &self.search {
            Some(term) if !term.trim().is_empty() => {
                let needle = term.trim().to_lowercase();
                rows.iter()
                    .filter(|row| {
                        T::columns().iter().any(|column| {
                            row.value(column)
                                .is_some_and(|v| v.to_lowercase().contains(&needle))
                        })
                    })
                    .cloned()
                    .collect()
            }
            _ => rows.to_vec(),
        };

        if let Some((column, direction)) = &self.sort {
            // Stable sort keeps fetch order among equal keys.
            out.sort_by(|a, b| {
                match (a.value(column), b.value(column)) {
                    (Some(a), Some(b)) => {
                        let ord = a.cmp(&b);
                        match direction {
                            SortDirection::Ascending => ord,
                            SortDirection::Descending => ord.reverse(),
                        }
                    }
                    // Absent cells go last in both directions.
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                }
            });
        }

        if let Some(size) = self.page_size {
            let page = self.page.max(1);
            out = out
                .into_iter()
                .skip((page - 1) * size)
                .take(size)
                .collect();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        city: Option<&'static str>,
    }

    impl Tabular for Row {
        fn columns() -> &'static [&'static str] {
            &["name", "city"]
        }

        fn value(&self, column: &str) -> Option<String> {
            match column {
                "name" => Some(self.name.to_string()),
                "city" => self.city.map(str::to_string),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Harare Central", city: Some("Harare") },
            Row { name: "Bulawayo Depot", city: Some("Bulawayo") },
            Row { name: "Warehouse", city: None },
            Row { name: "Mutare Kiosk", city: Some("Mutare") },
        ]
    }

    #[test]
    fn identity_query_returns_rows_unchanged() {
        let rows = rows();
        assert_eq!(TableQuery::new().apply(&rows), rows);
    }

    #[test]
    fn search_is_case_insensitive_and_spans_all_columns() {
        let result = TableQuery::new().with_search("HARARE").apply(&rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Harare Central");

        // Matches the city column, not just the name.
        let result = TableQuery::new().with_search("bulaw").apply(&rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bulawayo Depot");
    }

    #[test]
    fn blank_search_matches_everything() {
        assert_eq!(TableQuery::new().with_search("   ").apply(&rows()).len(), 4);
    }

    #[test]
    fn sort_ascending_puts_absent_cells_last() {
        let result = TableQuery::new()
            .with_sort("city", SortDirection::Ascending)
            .apply(&rows());
        let names: Vec<_> = result.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["Bulawayo Depot", "Harare Central", "Mutare Kiosk", "Warehouse"]
        );
    }

    #[test]
    fn sort_descending_still_puts_absent_cells_last() {
        let result = TableQuery::new()
            .with_sort("city", SortDirection::Descending)
            .apply(&rows());
        let names: Vec<_> = result.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["Mutare Kiosk", "Harare Central", "Bulawayo Depot", "Warehouse"]
        );
    }

    #[test]
    fn pagination_slices_after_filter_and_sort() {
        let result = TableQuery::new()
            .with_sort("name", SortDirection::Ascending)
            .with_page(2, 2)
            .apply(&rows());
        let names: Vec<_> = result.iter().map(|r| r.name).collect();
        assert_eq!(names, ["Mutare Kiosk", "Warehouse"]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let result = TableQuery::new().with_page(9, 10).apply(&rows());
        assert!(result.is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let result = TableQuery::new().with_page(0, 2).apply(&rows());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Harare Central");
    }
}
