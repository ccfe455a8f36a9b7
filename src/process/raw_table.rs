#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column names exactly as the header row spells them.
    pub headers: Vec<String>,
    /// Each data row, one String per header (short rows are padded with "").
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
