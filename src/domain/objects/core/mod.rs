pub mod comparison;
pub mod diff;
pub mod document;
pub mod mistake;
pub mod report;
