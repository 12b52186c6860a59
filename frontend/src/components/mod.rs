pub mod guard;
pub mod layout;
pub mod modal;
pub mod toast;
