//! # Structural Identity
//!
//! Identity resolution for order-preserving YAML/JSON map sequences.
//!
//! Given a list of decoded maps, this library decides whether a single field
//! (`name`, `key` or `id`) identifies every entry, so that two versions of the
//! list can be compared by identity instead of by position. It also provides
//! lookups that fail with descriptive errors instead of yielding nulls.
//!
//! ## Modules
//!
//! - [`value`] - Decoded documents with key order preserved
//! - [`record`] - Key lookup and key enumeration over records
//! - [`namedlist`] - Identifier resolution, entry lookup and name/data splitting
//! - [`path`] - Path expressions that navigate named lists
//! - [`term`] - Terminal presentation settings
//! - [`error`] - Error types shared by all of the above

pub mod error;
pub mod namedlist;
pub mod path;
pub mod record;
pub mod term;
pub mod value;

pub use error::{Error, Result};
pub use namedlist::{
    find_by_identifier, names_of_named_list, resolve_identifier, resolve_identifier_with,
    split_name_and_data, IdentifierPriority, NamedList, Pairing,
};
pub use path::{grab, grab_str, Path, PathElement, PathStyle};
pub use record::{entry_by_identifier_and_name, keys_of, value_for};
pub use term::{Presentation, Terminal, TerminalSettings};
pub use value::{Pair, Record, Value};
