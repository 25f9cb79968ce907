pub mod conversion_summary;
pub use conversion_summary::ConversionSummary;

pub mod config;
pub use config::ConverterConfig;

pub mod detailed_record;
pub use detailed_record::DetailedRecord;

pub mod error;
pub use error::Error;

pub mod symbol_collector;
pub use symbol_collector::SymbolCollector;
