use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use crate::constants::{COLUMN_X1, COLUMN_X2, COLUMN_Y};
use crate::error::{Result, SurfaceError};

/// Flat columns of a sampled response surface, in file order.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceTable {
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
    pub y: Vec<f64>,
}

impl SurfaceTable {
    pub fn new(x1: Vec<f64>, x2: Vec<f64>, y: Vec<f64>) -> Self {
        SurfaceTable { x1, x2, y }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(File::open(path)?)?;
        debug!("Read {} rows from {:?}", table.len(), path);
        Ok(table)
    }

    /// Parses CSV with a header row holding at least `x1`, `x2` and `y`.
    /// Other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let x1_idx = column_index(&headers, COLUMN_X1)?;
        let x2_idx = column_index(&headers, COLUMN_X2)?;
        let y_idx = column_index(&headers, COLUMN_Y)?;

        let mut table = SurfaceTable::new(vec![], vec![], vec![]);
        for (row, result) in reader.records().enumerate() {
            let record = result?;
            table.x1.push(parse_field(&record, x1_idx, row + 1, COLUMN_X1)?);
            table.x2.push(parse_field(&record, x2_idx, row + 1, COLUMN_X2)?);
            table.y.push(parse_field(&record, y_idx, row + 1, COLUMN_Y)?);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or(SurfaceError::MissingColumn(name))
}

fn parse_field(record: &StringRecord, idx: usize, row: usize, column: &'static str) -> Result<f64> {
    // The csv reader rejects ragged rows, so the field is always present
    let raw = record.get(idx).unwrap_or("");
    raw.trim().parse::<f64>().map_err(|_| SurfaceError::InvalidValue {
        row,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use super::*;

    #[test]
    fn test_reads_columns_in_file_order() {
        let data = "x1,x2,y\n-1,-1,2\n-1,1,2\n1,-1,2.5\n";
        let table = SurfaceTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.x1, vec![-1.0, -1.0, 1.0]);
        assert_eq!(table.x2, vec![-1.0, 1.0, -1.0]);
        assert_eq!(table.y, vec![2.0, 2.0, 2.5]);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let data = "y, x2 ,note,x1\n4.0,2.0,a,1.0\n";
        let table = SurfaceTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.x1, vec![1.0]);
        assert_eq!(table.x2, vec![2.0]);
        assert_eq!(table.y, vec![4.0]);
    }

    #[test]
    fn test_missing_y_column() {
        let data = "x1,x2,z\n0,0,0\n";
        let err = SurfaceTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SurfaceError::MissingColumn("y")));
    }

    #[test]
    fn test_misnamed_column_is_not_matched_case_insensitively() {
        let data = "X1,x2,y\n0,0,0\n";
        let err = SurfaceTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SurfaceError::MissingColumn("x1")));
    }

    #[test]
    fn test_non_numeric_value() {
        let data = "x1,x2,y\n0,0,0\n0,abc,1\n";
        let err = SurfaceTable::from_reader(data.as_bytes()).unwrap_err();
        match err {
            SurfaceError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "x2");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_cell_is_not_coerced() {
        let data = "x1,x2,y\n0,0,\n";
        let err = SurfaceTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidValue { column: "y", .. }));
    }

    #[test]
    fn test_ragged_row() {
        let data = "x1,x2,y\n0,0,0\n1,1\n";
        let err = SurfaceTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SurfaceError::Csv(_)));
    }

    #[test]
    fn test_header_only_gives_empty_table() {
        let table = SurfaceTable::from_reader("x1,x2,y\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x1,x2,y").unwrap();
        writeln!(file, "0.5,-0.5,0.5").unwrap();
        let table = SurfaceTable::from_file(file.path()).unwrap();
        assert_eq!(table, SurfaceTable::new(vec![0.5], vec![-0.5], vec![0.5]));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SurfaceTable::from_file(dir.path().join("surface_points.csv")).unwrap_err();
        assert!(matches!(err, SurfaceError::Io(_)));
    }
}
