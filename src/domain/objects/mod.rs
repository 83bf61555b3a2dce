mod core;

pub use self::core::{comparison, diff, document, mistake, report};
