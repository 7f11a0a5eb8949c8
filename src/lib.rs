//! Reader for Quake and Valve 220 `.map` files.
//!
//! A map is read byte by byte into a [`qmap::QuakeMap`] of entities, their
//! key/value properties and brushes, and each brush's faces.  Any malformed
//! input aborts the whole parse with an error that carries the byte offset.
//!
//! ```
//! use qmap_read::qmap::{parse_source, SliceSource, TextureFormat};
//!
//! let text = b"{\n\"classname\" \"worldspawn\"\n{\n\
//!     ( 0 0 0 ) ( 0 0 1 ) ( 1 0 0 ) tex/wall 16 32 45 1 1\n}\n}\n";
//! let map = parse_source(SliceSource::new(text), "inline").unwrap();
//!
//! let world = map.worldspawn().unwrap();
//! assert_eq!(world.brushes[0].faces[0].format(), TextureFormat::Quake);
//! ```

#![no_std]

#[cfg(all(not(feature = "std"), not(feature = "alloc_fills")))]
compile_error!("Must use feature 'std' or include 'alloc_fills'");

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod qmap;

#[cfg(feature = "std")]
pub use qmap::parse;

pub use qmap::{parse_source, Error, QuakeMap};
