mod csv_io;

pub use csv_io::{read_csv, read_csv_from_bytes};
