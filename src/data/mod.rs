//! Named string-column tables for catalog data.
//!
//! A [`TextFrame`] is the corpus representation handed to the recommender:
//! ordered rows, named columns, every cell a string. Missing CSV cells are
//! normalized to the empty string at load time, so downstream code never
//! sees absent values.

use std::fs::File;
use std::path::Path;

use crate::error::{RecomendarError, Result};

/// A table of named string columns, all of equal length.
///
/// # Examples
///
/// ```
/// use recomendar::data::TextFrame;
///
/// let frame = TextFrame::new(vec![
///     ("title".to_string(), vec!["Alpha".to_string(), "Beta".to_string()]),
///     ("overview".to_string(), vec!["space".to_string(), "ocean".to_string()]),
/// ]).expect("columns have equal lengths");
///
/// assert_eq!(frame.shape(), (2, 2));
/// assert_eq!(frame.column("title").expect("column exists")[1], "Beta");
/// ```
#[derive(Debug, Clone)]
pub struct TextFrame {
    columns: Vec<(String, Vec<String>)>,
    n_rows: usize,
}

impl TextFrame {
    /// Creates a new `TextFrame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, columns have different
    /// lengths, a column name is empty, or names repeat.
    pub fn new(columns: Vec<(String, Vec<String>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("TextFrame must have at least one column".into());
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err("All columns must have the same length".into());
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate column names not allowed".into());
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Loads a `TextFrame` from a CSV file with a header row.
    ///
    /// Every column is read as a string column. Records shorter than the
    /// header are padded with empty strings; longer records keep only the
    /// headed fields.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened and `CsvParse` (with the
    /// 1-based line number) if a record cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use recomendar::data::TextFrame;
    ///
    /// let catalog = TextFrame::from_csv_path("data/movies.csv").expect("catalog loads");
    /// println!("{} items", catalog.n_rows());
    /// ```
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| RecomendarError::CsvParse {
                line: 1,
                message: e.to_string(),
            })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut columns: Vec<(String, Vec<String>)> =
            headers.into_iter().map(|h| (h, Vec::new())).collect();

        let mut line = 2;
        for record in reader.records() {
            let record = record.map_err(|e| RecomendarError::CsvParse {
                line,
                message: e.to_string(),
            })?;

            for (idx, (_, values)) in columns.iter_mut().enumerate() {
                values.push(record.get(idx).unwrap_or("").to_string());
            }
            line += 1;
        }

        Self::new(columns)
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in declaration order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns true if a column with this name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Returns a column by name.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` naming the column if it does not exist.
    pub fn column(&self, name: &str) -> Result<&[String]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| RecomendarError::MissingColumn {
                column: name.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
