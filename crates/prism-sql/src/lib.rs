pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer, TypedValue};

mod settings;
pub use settings::{ExecuteWithoutWhere, ParamType, RenderNameCase, RenderQuotedNames, Settings};
