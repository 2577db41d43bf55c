pub mod error;
pub mod validator;

pub use error::Error;
pub use validator::{Validation, Validator};
