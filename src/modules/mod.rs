pub mod clock;
pub mod input;
pub mod inspector;
pub mod layout;
