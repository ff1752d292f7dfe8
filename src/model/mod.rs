pub mod catalog;
pub mod category;
pub mod common;
pub mod output;
