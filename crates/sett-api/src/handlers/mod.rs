pub mod setts;
pub mod users;

pub use setts::list_setts;
pub use users::get_user_account;
