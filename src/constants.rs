// KRX export column headers, by name. Columns are looked up by header, never
// by position, since the exports vary in column count per file type.
pub const TICKER_COLUMN: &str = "단축코드";
pub const SHORT_NAME_COLUMN: &str = "한글종목약명";
pub const FULL_NAME_COLUMN: &str = "한글종목명";
pub const EXCHANGE_COLUMN: &str = "기초시장분류";
pub const ASSET_TYPE_COLUMN: &str = "기초자산분류";
pub const LISTING_DATE_COLUMN: &str = "상장일";

// Input discovery: files named `data_<type>_*.csv` under the input directory.
pub const INPUT_FILE_PREFIX: &str = "data_";
pub const INPUT_FILE_EXTENSION: &str = "csv";
pub const UNKNOWN_FILE_TYPE: &str = "unknown";

pub const SYMBOL_TABLE_FILE_NAME: &str = "krx_codes.csv";
pub const DETAILED_FILE_NAME: &str = "krx_codes_detailed.csv";

pub const SYMBOL_TABLE_HEADER: [&str; 2] = ["종목코드", "종목명"];
pub const DETAILED_HEADER: [&str; 6] = [
    "ticker",
    "name",
    "file_type",
    "exchange",
    "asset_type",
    "listing_date",
];

/// Minimum character count for a usable ticker.
pub const MIN_TICKER_LEN: usize = 6;

pub const DEFAULT_INPUT_DIR: &str = "data/new";
pub const DEFAULT_OUTPUT_DIR: &str = "data";
