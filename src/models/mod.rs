pub mod account;
pub mod record;
pub mod reset_code;

pub use account::{Account, AccountSummary, Role};
pub use record::Record;
pub use reset_code::ResetCode;
