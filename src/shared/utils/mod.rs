/// Utility modules
pub mod email_validator;
pub mod form;
pub mod slot;
pub mod token;

pub use email_validator::validate_and_normalize_email;
pub use form::{optional_text, RequiredFields};
pub use slot::{is_valid_date, is_valid_slot};
pub use token::{generate_session_token, hash_token};
