//! Read-only finished-clients report: filtering, sorting and export over
//! the completed-clients dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed client as shown in the report. No lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedClient {
    pub id: String,
    pub name: String,
    pub completion_date: NaiveDate,
    pub implementer: String,
    pub total_time_days: i64,
}

/// Payload handed off by the workflow board when a demand completes the
/// final pipeline stage. The report assigns the `FIN` display id on
/// admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedRecord {
    pub name: String,
    pub implementer: String,
    pub completion_date: NaiveDate,
    pub total_time_days: i64,
}

/// Column a report view can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic on client name.
    Name,
    /// Chronological on completion date.
    CompletionDate,
    /// Numeric on total pipeline time.
    TotalTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The three filter dimensions of the report view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ReportFilters {
    /// Free text matched against name and id only.
    text: String,
    /// Completion date must fall strictly inside this window; records on
    /// either boundary date are excluded. This mirrors the original view's
    /// behavior exactly (see DESIGN.md).
    date_range: Option<(NaiveDate, NaiveDate)>,
    /// Exact implementer match, from the table column filter.
    implementer: Option<String>,
}

/// Filter/sort engine over the finished-clients dataset.
///
/// Filtering is a pure derived view: the stored rows are never mutated by
/// a filter or sort change.
#[derive(Default)]
pub struct FinishedClientsReport {
    rows: Vec<FinishedClient>,
    filters: ReportFilters,
    sort: Option<(SortKey, SortOrder)>,
}

impl FinishedClientsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report seeded with the original sample dataset.
    pub fn with_sample_data() -> Self {
        let row = |id: &str, name: &str, date: &str, implementer: &str, days| FinishedClient {
            id: id.to_string(),
            name: name.to_string(),
            completion_date: date.parse().expect("valid seed date"),
            implementer: implementer.to_string(),
            total_time_days: days,
        };
        Self {
            rows: vec![
                row("FIN001", "Bar E", "2025-05-10", "Ana Souza", 15),
                row("FIN002", "Restaurante F", "2025-05-05", "Carlos Oliveira", 12),
                row("FIN003", "Hamburgueria G", "2025-04-28", "Pedro Costa", 20),
                row("FIN004", "Sorveteria H", "2025-04-15", "Fernanda Lima", 10),
                row("FIN005", "Padaria I", "2025-03-30", "João Silva", 18),
            ],
            ..Self::default()
        }
    }

    /// Admit a record handed off from the workflow board, assigning the
    /// next free `FIN` display id.
    pub fn admit(&mut self, record: FinishedRecord) -> &FinishedClient {
        let next = self
            .rows
            .iter()
            .filter_map(|r| r.id.strip_prefix("FIN"))
            .filter_map(|s| s.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        self.rows.push(FinishedClient {
            id: format!("FIN{next:03}"),
            name: record.name,
            completion_date: record.completion_date,
            implementer: record.implementer,
            total_time_days: record.total_time_days,
        });
        self.rows.last().expect("row just pushed")
    }

    pub fn set_text_filter(&mut self, text: impl Into<String>) {
        self.filters.text = text.into();
    }

    /// Set the completion-date window. Both boundary dates are excluded.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.filters.date_range = Some((start, end));
    }

    pub fn set_implementer_filter(&mut self, implementer: Option<String>) {
        self.filters.implementer = implementer;
    }

    /// Reset every filter dimension to its default. Idempotent.
    pub fn clear_filters(&mut self) {
        self.filters = ReportFilters::default();
    }

    pub fn set_sort(&mut self, key: SortKey, order: SortOrder) {
        self.sort = Some((key, order));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// All stored rows, unfiltered.
    pub fn rows(&self) -> &[FinishedClient] {
        &self.rows
    }

    /// The currently filtered (and sorted) view.
    pub fn filtered(&self) -> Vec<&FinishedClient> {
        let mut view: Vec<&FinishedClient> = self
            .rows
            .iter()
            .filter(|row| self.keeps(row))
            .collect();

        if let Some((key, order)) = self.sort {
            view.sort_by(|a, b| {
                let ordering = match key {
                    SortKey::Name => a.name.cmp(&b.name),
                    SortKey::CompletionDate => a.completion_date.cmp(&b.completion_date),
                    SortKey::TotalTime => a.total_time_days.cmp(&b.total_time_days),
                };
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        view
    }

    /// Export the currently filtered rows as CSV, one line per row, with
    /// the report's column headers.
    pub fn export_csv(&self) -> String {
        let mut out = String::from("ID,Nome,Data de Conclusão,Responsável,Tempo Total (dias)\n");
        for row in self.filtered() {
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                csv_field(&row.id),
                csv_field(&row.name),
                row.completion_date,
                csv_field(&row.implementer),
                row.total_time_days,
            ));
        }
        out
    }

    fn keeps(&self, row: &FinishedClient) -> bool {
        if !crate::search::matches_text(&self.filters.text, &[row.name.as_str(), row.id.as_str()]) {
            return false;
        }

        if let Some((start, end)) = self.filters.date_range {
            if row.completion_date <= start || row.completion_date >= end {
                return false;
            }
        }

        if let Some(implementer) = &self.filters.implementer {
            if &row.implementer != implementer {
                return false;
            }
        }

        true
    }
}

/// Quote a CSV field when it contains a delimiter or quote.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn unfiltered_view_returns_all_sample_rows() {
        let report = FinishedClientsReport::with_sample_data();
        assert_eq!(report.filtered().len(), 5);
    }

    #[test]
    fn text_filter_matches_name_or_id_only() {
        let mut report = FinishedClientsReport::with_sample_data();

        report.set_text_filter("bar");
        let view = report.filtered();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "FIN001");

        report.set_text_filter("fin00");
        assert_eq!(report.filtered().len(), 5);

        // "Ana Souza" is an implementer; the text filter deliberately does
        // not look at that column.
        report.set_text_filter("Souza");
        assert!(report.filtered().is_empty());
    }

    #[test]
    fn date_range_excludes_both_boundary_dates() {
        let mut report = FinishedClientsReport::with_sample_data();
        report.admit(FinishedRecord {
            name: "Bistrô J".into(),
            implementer: "Maria Santos".into(),
            completion_date: date("2025-05-01"),
            total_time_days: 9,
        });

        report.set_date_range(date("2025-05-01"), date("2025-05-10"));
        let view = report.filtered();

        // FIN001 sits on the upper bound, the admitted row on the lower
        // bound; both are excluded. Only FIN002 (2025-05-05) survives.
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "FIN002");
    }

    #[test]
    fn implementer_filter_is_exact_match() {
        let mut report = FinishedClientsReport::with_sample_data();
        report.set_implementer_filter(Some("Carlos Oliveira".into()));
        let view = report.filtered();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "FIN002");

        report.set_implementer_filter(Some("Carlos".into()));
        assert!(report.filtered().is_empty());
    }

    #[test]
    fn clear_filters_is_idempotent() {
        let mut report = FinishedClientsReport::with_sample_data();
        report.set_text_filter("bar");
        report.set_date_range(date("2025-05-01"), date("2025-05-10"));
        report.set_implementer_filter(Some("Ana Souza".into()));

        report.clear_filters();
        let once: Vec<String> = report.filtered().iter().map(|r| r.id.clone()).collect();
        report.clear_filters();
        let twice: Vec<String> = report.filtered().iter().map(|r| r.id.clone()).collect();

        assert_eq!(once, twice);
        assert_eq!(once.len(), 5);
    }

    #[test]
    fn sorters_cover_all_three_columns() {
        let mut report = FinishedClientsReport::with_sample_data();

        report.set_sort(SortKey::Name, SortOrder::Ascending);
        assert_eq!(report.filtered()[0].name, "Bar E");

        report.set_sort(SortKey::CompletionDate, SortOrder::Descending);
        assert_eq!(report.filtered()[0].id, "FIN001");

        report.set_sort(SortKey::TotalTime, SortOrder::Ascending);
        assert_eq!(report.filtered()[0].total_time_days, 10);
    }

    #[test]
    fn admit_assigns_the_next_fin_id() {
        let mut report = FinishedClientsReport::with_sample_data();
        let row = report.admit(FinishedRecord {
            name: "Bistrô J".into(),
            implementer: "Maria Santos".into(),
            completion_date: date("2025-06-20"),
            total_time_days: 9,
        });
        assert_eq!(row.id, "FIN006");
        assert_eq!(report.rows().len(), 6);
    }

    #[test]
    fn export_contains_only_filtered_rows() {
        let mut report = FinishedClientsReport::with_sample_data();
        report.set_text_filter("padaria");
        let csv = report.export_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID,Nome"));
        assert_eq!(lines[1], "FIN005,Padaria I,2025-03-30,João Silva,18");
    }
}
