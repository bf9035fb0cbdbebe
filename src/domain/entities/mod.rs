pub mod employee;
pub mod field;
pub mod filter;
pub mod page;
pub mod record;
pub mod settings;
pub mod sort;
