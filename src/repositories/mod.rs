pub mod account;
pub mod record;
pub mod reset_code;

pub use account::AccountRepository;
pub use record::RecordRepository;
pub use reset_code::ResetCodeRepository;
