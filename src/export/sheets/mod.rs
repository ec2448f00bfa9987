//! Excel sheet generators, one per extraction pass

pub mod api_label;
pub mod data;
pub mod fields;
pub mod record_type;

pub use api_label::{API_LABEL_SHEET, create_api_label_sheet};
pub use data::{DATA_SHEET, create_data_sheet};
pub use fields::{FIELDS_SHEET, create_fields_sheet};
pub use record_type::{RECORD_TYPE_SHEET, create_record_type_sheet};
