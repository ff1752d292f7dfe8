pub mod action;
pub mod guard;
pub mod processor;
pub mod scanner;
pub mod stats;
pub mod toggle;
