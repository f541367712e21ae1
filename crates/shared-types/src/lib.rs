pub mod application;
pub mod attendance;
pub mod claims;
pub mod common;
pub mod company;
pub mod dashboard;
pub mod error;
pub mod leave;
pub mod member;
pub mod requests;
pub mod service_request;

pub use application::*;
pub use attendance::*;
pub use claims::*;
pub use common::*;
pub use company::*;
pub use dashboard::*;
pub use error::*;
pub use leave::*;
pub use member::*;
pub use requests::*;
pub use service_request::*;
