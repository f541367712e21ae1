pub mod actions;
pub mod dashboard;
pub mod gate;
pub mod panels;
pub mod public_page;
