//! Delimiters and keys of the text matrix format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separates a header key from its value
pub const KEY_SEPARATOR: char = '=';

/// Opens an entry line
pub const ENTRY_OPEN: char = '(';

/// Closes an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separates the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Every entry line holds row, column and value
pub const FIELDS_PER_ENTRY: usize = 3;

/// 1-based line number of the first possible entry line
pub const FIRST_ENTRY_LINE: usize = 3;
