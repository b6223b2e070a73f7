//! Path module - Locations of values inside decoded documents.
//!
//! Paths are written in go-patch style (`/list/name=entry/field`) or dot
//! style (`list.entry.field`) and navigate named lists by identity.

mod grab;
mod parse;
mod path;

pub use grab::{grab, grab_str};
pub use parse::*;
pub use path::*;
