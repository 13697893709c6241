mod blocking;
pub mod health;
pub mod login;
pub mod logout;
pub mod me;
pub mod menu;
pub mod password_reset;
pub mod quotes;
mod records;
pub mod reservations;

pub use health::health_check;
pub use login::login;
pub use logout::logout;
pub use me::current_user;
pub use menu::{create_menu_item, list_menu};
pub use password_reset::{
    generate_password_reset, list_password_reset_codes, reset_password, verify_reset_code,
};
pub use quotes::{create_quote, list_quotes, send_quote};
pub use reservations::{create_reservation, list_reservations};
