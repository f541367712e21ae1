pub mod company;
pub mod member;
