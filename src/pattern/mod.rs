//! Regex builders for test identifiers.
//!
//! All builders escape raw text before it enters a pattern and never escape
//! fragments they have already built. They are total: any [`TestId`] yields a
//! pattern.
//!
//! [`TestId`]: crate::id::TestId

pub mod identifier;
pub mod name;
pub mod params;

pub use identifier::{ancestor_pattern, test_id_pattern};
pub use name::{test_name_pattern, NameMode};
pub use params::{title_pattern, translate_parameter_tokens, ParameterToken};
