//! Value module - In-memory representation of decoded YAML/JSON documents.
//!
//! Maps decode into [`Record`]s that preserve the key order of the source.

mod codec;
mod value;

pub use codec::*;
pub use value::*;
