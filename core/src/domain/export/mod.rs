pub mod csv;

pub use csv::{export_filename, export_profiles_csv};
