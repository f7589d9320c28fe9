//! Report export

mod excel;

pub use excel::{export_cbr_to_excel, export_humedad_to_excel, report_filename};
