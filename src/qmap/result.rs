#[cfg(feature = "std")]
use std::{boxed::Box, string::String, string::ToString};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String};

use core::fmt;

/// Grammar production that was being read when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Document,
    Entity,
    Property,
    Brush,
    Face,
    TextureFormat,
    Number,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Construct::Document => "document",
            Construct::Entity => "entity",
            Construct::Property => "property",
            Construct::Brush => "brush",
            Construct::Face => "face",
            Construct::TextureFormat => "texture format",
            Construct::Number => "number",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Could not open map source `{name}`: {reason}")]
    SourceNotFound { name: String, reason: String },

    #[error("{0}")]
    Io(String),

    #[error(
        "Unexpected symbol {symbol:?} at offset {offset} while parsing {construct}"
    )]
    UnexpectedSymbol {
        symbol: char,
        offset: u64,
        construct: Construct,
    },

    #[error("Unexpected end of stream at offset {offset} while parsing {construct}")]
    UnexpectedEof { offset: u64, construct: Construct },

    #[error("Could not parse number `{text}` at offset {offset}")]
    MalformedNumber { text: String, offset: u64 },

    #[error("Could not parse Vec{dimensions} at offset {offset}")]
    MalformedVector {
        dimensions: u8,
        offset: u64,
        #[source]
        source: Box<Error>,
    },

    #[error("Could not parse face at offset {offset}")]
    MalformedFace {
        offset: u64,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    #[cfg(feature = "std")]
    pub fn from_io(io_error: std::io::Error) -> Error {
        Error::Io(io_error.to_string())
    }

    pub(crate) fn unexpected(byte: u8, offset: u64, construct: Construct) -> Error {
        Error::UnexpectedSymbol {
            symbol: char::from(byte),
            offset,
            construct,
        }
    }

    pub(crate) fn eof(offset: u64, construct: Construct) -> Error {
        Error::UnexpectedEof { offset, construct }
    }

    /// Byte offset reported by the outermost error, if it has one
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::SourceNotFound { .. } | Error::Io(_) => None,
            Error::UnexpectedSymbol { offset, .. }
            | Error::UnexpectedEof { offset, .. }
            | Error::MalformedNumber { offset, .. }
            | Error::MalformedVector { offset, .. }
            | Error::MalformedFace { offset, .. } => Some(*offset),
        }
    }

    /// Innermost error of a wrapped chain
    pub fn root_cause(&self) -> &Error {
        let mut err = self;

        while let Error::MalformedVector { source, .. }
        | Error::MalformedFace { source, .. } = err
        {
            err = &**source;
        }

        err
    }
}

pub type Result<T> = core::result::Result<T, Error>;
