//! Hand-written parser for the brace-delimited scene format.
//!
//! A scene file is one `{ ... }` document of `"name": value` pairs. Values
//! are floats, `[x, y, z]` vectors, quoted names, or fixed sub-blocks and
//! arrays. Figure blocks are driven by a dispatch table (`field`) that maps
//! each recognized field name to a typed setter on the figure record; the
//! other block kinds (camera, material, texture) have small fixed field
//! sets matched inline.
//!
//! Every parse error is fatal for the surrounding block: the parser reports
//! the first problem it finds and makes no attempt to resynchronize.

mod cursor;
mod field;
mod figure;
mod scene;
mod value;

pub use cursor::Cursor;
pub use field::{figure_fields, FieldDescriptor, FieldSlot, FieldTable, TableError};
pub use figure::{parse_figure, parse_figure_into};
pub use scene::parse_scene;
pub use value::ValueError;

use thiserror::Error;

/// Errors that can occur while parsing scene text.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A field or section name with no entry in the relevant field set.
    #[error("line {line}: unknown property \"{name}\"")]
    UnknownProperty { name: String, line: usize },

    /// A known field whose value literal could not be interpreted.
    #[error("line {line}: bad value for \"{field}\": {source}")]
    MalformedValue {
        field: String,
        line: usize,
        #[source]
        source: ValueError,
    },

    /// A missing or misplaced delimiter, or an unterminated block.
    #[error("line {line}: expected {expected}")]
    MalformedSyntax { expected: &'static str, line: usize },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
