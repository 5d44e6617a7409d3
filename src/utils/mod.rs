pub mod strings;

pub use strings::{ucfirst, StringError};
