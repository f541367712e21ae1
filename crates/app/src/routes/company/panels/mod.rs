pub mod applications;
pub mod attendance;
pub mod employees;
pub mod invite_user;
pub mod leaves;
pub mod overview;
pub mod profile;
