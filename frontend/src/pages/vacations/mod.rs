pub mod components;
pub mod form_state;
pub mod layout;
pub mod panel;
pub mod query;
pub mod repository;
pub mod view_model;

pub use panel::VacationsPage;
