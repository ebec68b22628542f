mod date_string;
pub mod helpers;
mod secret;

pub use date_string::{is_date, DateString, DateStringError};
pub use secret::Secret;
