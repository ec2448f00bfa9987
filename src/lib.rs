pub mod config;
pub mod convert;
pub mod export;
pub mod metadata;
pub mod workbook;
