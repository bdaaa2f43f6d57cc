mod csv_log;

pub use csv_log::{LogTail, UTF8_BOM, append_records, read_tail};
