//! The growing result buffer.

use protview::ProteinRow;

/// Ordered row buffer for the current query.
///
/// Replaced wholesale when the query changes, appended to by continuation
/// fetches; the sequence order is exactly the server's page order across
/// all pages applied so far.
#[derive(Default)]
pub struct ResultsState {
    rows: Vec<ProteinRow>,
}

impl ResultsState {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[ProteinRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the buffer with the first page of a new query.
    pub fn replace(&mut self, rows: Vec<ProteinRow>) {
        self.rows = rows;
    }

    /// Appends a continuation page in server order.
    pub fn append(&mut self, rows: Vec<ProteinRow>) {
        self.rows.extend(rows);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(accession: &str) -> ProteinRow {
        ProteinRow {
            accession: accession.to_string(),
            entry_name: String::new(),
            genes: Vec::new(),
            organism: String::new(),
            location: None,
            length: None,
        }
    }

    #[test]
    fn append_preserves_page_order() {
        let mut results = ResultsState::new();
        results.replace(vec![row("P1"), row("P2")]);
        results.append(vec![row("P3")]);
        let accessions: Vec<_> = results.rows().iter().map(|r| r.accession.as_str()).collect();
        assert_eq!(accessions, ["P1", "P2", "P3"]);
    }

    #[test]
    fn replace_discards_previous_contents() {
        let mut results = ResultsState::new();
        results.replace(vec![row("P1"), row("P2")]);
        results.replace(vec![row("Q1")]);
        assert_eq!(results.len(), 1);
        assert_eq!(results.rows()[0].accession, "Q1");
    }

    #[test]
    fn append_to_empty_buffer_behaves_like_replace() {
        let mut results = ResultsState::new();
        results.append(vec![row("P1")]);
        assert_eq!(results.len(), 1);
    }
}
