mod error_kind;
pub mod ports;
pub mod services;

pub use error_kind::ErrorKind;
