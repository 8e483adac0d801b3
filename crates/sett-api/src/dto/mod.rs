pub mod account;
pub mod response;

pub use account::*;
pub use response::*;
