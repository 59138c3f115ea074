mod format;
mod json;
mod table;

pub(crate) use format::NumberFormat;
pub(crate) use json::{load_record, record_to_json, save_record};
pub(crate) use table::{TableOptions, print_comparison_table, print_pricing_table, print_query_table};
