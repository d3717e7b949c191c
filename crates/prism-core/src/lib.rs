pub mod dialect;
pub use dialect::{Dialect, DialectSet, Family};

mod error;
pub use error::{Error, IntoError};

mod name;
pub use name::{Name, NamePart, Quoted};

pub mod schema;
pub use schema::Catalog;

pub mod stmt;

/// A Result type alias that uses prism's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
