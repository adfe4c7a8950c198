pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use error::LoadError;
pub use io::{read_csv, read_csv_from_bytes};
pub use models::{SpeciesInfo, TreeRecord, TreeStatus};
