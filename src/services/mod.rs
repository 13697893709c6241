pub mod auth;
pub mod clock;
pub mod password_reset;

pub use auth::AuthService;
pub use clock::{Clock, ManualClock, SystemClock};
pub use password_reset::{PasswordResetService, Verification};
