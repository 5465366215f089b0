pub use crate::errors::{Result, ScopeError};
pub use crate::filter::{compile_filter, FilterCompiler, FilterMatcher, TestFilter};
pub use crate::id::{TestId, ROOT_ID};
pub use crate::pattern::{
    ancestor_pattern, test_id_pattern, test_name_pattern, translate_parameter_tokens, NameMode,
};
pub use crate::separators::Separators;

pub mod cli;
pub mod errors;
pub mod filter;
pub mod id;
pub mod pattern;
pub mod separators;
