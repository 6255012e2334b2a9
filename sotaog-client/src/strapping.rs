//! Tank strapping tables.
//!
//! The API serves strapping tables as two-column CSV text: gauge level, then
//! volume at that level.

use serde::Serialize;

/// A parsed strapping table mapping gauge level to volume.
///
/// Rows keep the order the server sent them in. A level that appears twice
/// keeps its first position and takes the later volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrappingTable {
    rows: Vec<(f64, f64)>,
}

impl StrappingTable {
    /// Parse CSV text such as `"0.0,0\n1.5,100\n3.0,250"`.
    ///
    /// Blank lines are ignored. Any other line must hold exactly two numbers.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut table = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut columns = line.split(',').map(str::trim);
            let (level, volume) = match (columns.next(), columns.next(), columns.next()) {
                (Some(level), Some(volume), None) => (level, volume),
                _ => return Err(format!("strapping row {} is not two columns: {line:?}", index + 1)),
            };

            let level = parse_number(level, index)?;
            let volume = parse_number(volume, index)?;
            table.insert(level, volume);
        }

        Ok(table)
    }

    fn insert(&mut self, level: f64, volume: f64) {
        match self.rows.iter_mut().find(|(l, _)| *l == level) {
            Some(row) => row.1 = volume,
            None => self.rows.push((level, volume)),
        }
    }

    /// Volume recorded for exactly this level.
    pub fn get(&self, level: f64) -> Option<f64> {
        self.rows
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, volume)| *volume)
    }

    /// `(level, volume)` pairs in server order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows.iter().copied()
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for StrappingTable {
    type Item = (f64, f64);
    type IntoIter = std::vec::IntoIter<(f64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

fn parse_number(value: &str, index: usize) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|e| format!("strapping row {} has a bad number {value:?}: {e}", index + 1))
}
