mod export_service;
mod print;
mod spreadsheet;

pub use export_service::ExportService;
pub use print::member_print_html;
pub use spreadsheet::{collectors_xlsx, member_register_xlsx, XLSX_CONTENT_TYPE};
