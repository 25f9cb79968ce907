pub mod discover_input_files;
pub mod extract_symbol_info;
pub mod file_type_tag;
pub mod is_valid_ticker;
pub mod read_krx_csv;
pub mod write_detailed_records;
pub mod write_symbol_table;

pub use discover_input_files::discover_input_files;
pub use extract_symbol_info::extract_symbol_info;
pub use file_type_tag::file_type_tag;
pub use is_valid_ticker::is_valid_ticker;
pub use read_krx_csv::read_krx_csv;
pub use write_detailed_records::write_detailed_records;
pub use write_symbol_table::write_symbol_table;
