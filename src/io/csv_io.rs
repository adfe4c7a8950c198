use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::LoadError;
use crate::models::{TreeRecord, TreeStatus};

/// Recognized column headers, matched case-sensitively.
const COL_TREE_ID: &str = "tree_ID";
const COL_SPECIES: &str = "species";
const COL_DBH: &str = "DBH";
const COL_HEIGHT: &str = "height";
const COL_STATUS: &str = "COD_Status";

/// Positions of the recognized columns within the header row.
///
/// Column order is not significant and unrecognized columns are
/// ignored. A recognized column that is missing stays `None`, and every
/// row falls back to that field's default.
#[derive(Debug)]
struct ColumnMap {
    tree_id: Option<usize>,
    species: Option<usize>,
    dbh: Option<usize>,
    height: Option<usize>,
    status: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let map = Self {
            tree_id: find(COL_TREE_ID),
            species: find(COL_SPECIES),
            dbh: find(COL_DBH),
            height: find(COL_HEIGHT),
            status: find(COL_STATUS),
        };
        for (name, idx) in [
            (COL_TREE_ID, map.tree_id),
            (COL_SPECIES, map.species),
            (COL_DBH, map.dbh),
            (COL_HEIGHT, map.height),
            (COL_STATUS, map.status),
        ] {
            if idx.is_none() {
                tracing::warn!("column '{name}' not in header; rows will use its default");
            }
        }
        map
    }
}

/// Verbatim text cell. Absent or empty cells are `None`.
fn text_cell(row: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numeric measurement cell. Absent, empty, or unparsable cells all
/// coerce to `0.0`, which therefore stands for both "measured as zero"
/// and "not measured".
fn numeric_cell(row: &StringRecord, idx: Option<usize>) -> f64 {
    idx.and_then(|i| row.get(i))
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Per-field defaulting policy:
///
/// | column     | absent / empty | unparsable      |
/// |------------|----------------|-----------------|
/// | tree_ID    | `None`         | (verbatim text) |
/// | species    | `"Unknown"`    | (verbatim text) |
/// | DBH        | `0.0`          | `0.0`           |
/// | height     | `0.0`          | `0.0`           |
/// | COD_Status | `Alive`        | kept verbatim   |
fn parse_records<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<TreeRecord>, LoadError> {
    let headers = rdr.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;

        let tree_id = text_cell(&row, columns.tree_id);
        let species =
            text_cell(&row, columns.species).unwrap_or_else(|| "Unknown".to_string());
        let dbh = numeric_cell(&row, columns.dbh);
        let height = numeric_cell(&row, columns.height);
        let status = text_cell(&row, columns.status)
            .map(|s| TreeStatus::from_code(&s))
            .unwrap_or_default();

        records.push(TreeRecord::new(tree_id, species, dbh, height, status));
    }

    Ok(records)
}

/// Read tree records from a CSV file.
///
/// The table must carry a header row; the five recognized columns may
/// appear in any order. Each field of each row is coerced independently
/// and falls back to its documented default, so a malformed cell never
/// aborts the load. Only file-level failures (`NotFound`, `Failure`)
/// and parser-level failures (`Parse`) are reported.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<TreeRecord>, LoadError> {
    let path = path.as_ref();
    tracing::info!("importing tree data table from {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Failure {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let records = parse_records(&mut rdr)?;
    tracing::debug!(rows = records.len(), "finished reading table");
    Ok(records)
}

/// Read tree records from CSV bytes.
pub fn read_csv_from_bytes(data: &[u8]) -> Result<Vec<TreeRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    parse_records(&mut rdr)
}
