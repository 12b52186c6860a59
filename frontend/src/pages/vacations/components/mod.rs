pub mod filter;
pub mod form;
pub mod pagination;
pub mod table;
