//! Read-only metadata snapshot consulted while building and rendering
//! statements.

mod catalog;
pub use catalog::Catalog;

mod column;
pub use column::ColumnMeta;

mod key;
pub use key::{ForeignKey, Key};

mod schema;
pub use schema::Schema;

mod sequence;
pub use sequence::SequenceMeta;

mod table;
pub use table::TableMeta;
