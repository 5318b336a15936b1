use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use tally_core::Result;

/// One uploaded table before any normalization: a header row plus text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Header names are trimmed; rows keep their cells verbatim.
    pub fn new<H, R>(headers: impl IntoIterator<Item = H>, rows: impl IntoIterator<Item = R>) -> Self
    where
        H: AsRef<str>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(|h| clean_header(h.as_ref())).collect(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Read comma-separated UTF-8 text with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(clean_header).collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            if record.iter().all(|cell| cell.is_empty()) && record.len() <= 1 {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first header exactly equal to `name`
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of the first header equal to `name` ignoring ASCII case
    pub fn column_ignore_case(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Cell text, or "" when the row is shorter than the header
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn clean_header(h: &str) -> String {
    h.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_headers_and_rows() {
        let csv = " Date ,Category,Amount\n2024-01-05,Food,50\n2024-01-06,Rent\n";
        let table = RawTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.headers(), ["Date", "Category", "Amount"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 2), "50");
        // short row is padded
        assert_eq!(table.cell(1, 2), "");
    }

    #[test]
    fn test_column_lookup() {
        let table = RawTable::new(["DATE", "Category"], Vec::<Vec<String>>::new());
        assert_eq!(table.column("Date"), None);
        assert_eq!(table.column_ignore_case("Date"), Some(0));
        assert_eq!(table.column("Category"), Some(1));
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let csv = "Date,Category,Amount\n2024-01-05,\"Food, Dining\",\"1,234\"\n";
        let table = RawTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.cell(0, 1), "Food, Dining");
        assert_eq!(table.cell(0, 2), "1,234");
    }
}
