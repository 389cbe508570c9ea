//! Test utilities for CLI command testing

use std::io::Write;
use tempfile::NamedTempFile;


/// A small but complete menu export
pub fn create_test_export() -> String {
    "Daily Menu,,
Date,01.05.2024,
Restaurant,Test Kitchen,
,,
Name,Weight,Price
Soups,,
Borscht,\"0,300\",45-50
Salads,,
Olivier,\"0,150\",30-00
"
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
