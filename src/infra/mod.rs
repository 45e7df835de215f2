pub mod prompt;
pub mod store;
