pub mod repr;

mod lexer;

pub mod parser;

pub mod result;

mod source;

mod vector;

pub use repr::{
    Alignment, Brush, Entity, Face, Plane, Property, QuakeMap, TextureAxis,
    TextureFormat,
};

pub use vector::{Vec2, Vec3};

pub use source::{ByteSource, SliceSource};

#[cfg(feature = "std")]
pub use source::ReaderSource;

#[cfg(feature = "std")]
pub use parser::parse;

pub use parser::parse_source;

pub use result::{Construct, Error, Result};

#[cfg(test)]
mod repr_write;





#[cfg(test)]
mod vector_test;
