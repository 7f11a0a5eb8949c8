#[cfg(feature = "std")]
use std::{boxed::Box, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

#[cfg(feature = "std")]
use std::{path::Path, string::ToString};

use crate::qmap;
use qmap::lexer::{
    is_blank, is_line_end, last_offset, next_structural, read_float,
    read_vec2, read_vec3, scan_vec2, skip_line,
};
use qmap::repr::{
    Alignment, Brush, Entity, Face, Plane, Property, QuakeMap, TextureAxis,
};
use qmap::result::Construct;
use qmap::{ByteSource, Error};

#[cfg(feature = "std")]
use qmap::ReaderSource;

const MIN_BRUSH_FACES: usize = 4;
const TEXTURE_CAPACITY: usize = 32;

/// Read the map file at `path`
#[cfg(feature = "std")]
pub fn parse(path: impl AsRef<Path>) -> qmap::Result<QuakeMap> {
    let path = path.as_ref();
    let source = ReaderSource::open(path)?;
    parse_source(source, path.display().to_string())
}

/// Read a map from any byte source.  `name` becomes [`QuakeMap::source`].
pub fn parse_source<S: ByteSource>(
    mut source: S,
    name: impl Into<String>,
) -> qmap::Result<QuakeMap> {
    let mut map = QuakeMap::new(name);
    log::debug!("Parsing map `{}`", map.source);

    loop {
        match next_structural(&mut source)? {
            Some(b'{') => {
                let start = last_offset(&source);
                let entity = parse_entity(&mut source)?;

                log::trace!(
                    "Entity at offset {}: {} properties, {} brushes",
                    start,
                    entity.properties.len(),
                    entity.brushes.len()
                );

                map.entities.push(entity);
            }
            Some(b' ' | b'\r' | b'\n') => {}
            Some(b) => {
                return Err(Error::unexpected(
                    b,
                    last_offset(&source),
                    Construct::Document,
                ));
            }
            None => break,
        }
    }

    log::debug!(
        "Parsed {} entities and {} brushes from `{}`",
        map.entities.len(),
        map.brush_count(),
        map.source
    );

    Ok(map)
}

fn parse_entity<S: ByteSource>(source: &mut S) -> qmap::Result<Entity> {
    let mut entity = Entity::new();

    loop {
        match next_structural(source)? {
            Some(b'}') => break,
            Some(b'"') => entity.properties.push(parse_property(source)?),
            Some(b'{') => entity.brushes.push(parse_brush(source)?),
            // Anything else between declarations is tolerated
            Some(_) => {}
            None => {
                return Err(Error::eof(source.offset(), Construct::Entity));
            }
        }
    }

    Ok(entity)
}

#[derive(Debug, Copy, Clone)]
enum PropertyState {
    Key,
    Separator,
    Value,
}

/// Entered just after the opening quote of the key
fn parse_property<S: ByteSource>(source: &mut S) -> qmap::Result<Property> {
    let mut key = Vec::new();
    let mut value = Vec::new();
    let mut state = PropertyState::Key;

    loop {
        let byte = source
            .read_byte()?
            .ok_or_else(|| Error::eof(source.offset(), Construct::Property))?;

        state = match (state, byte) {
            (PropertyState::Key, b'"') => PropertyState::Separator,
            (PropertyState::Key, b) => {
                key.push(b);
                PropertyState::Key
            }
            (PropertyState::Separator, b'"') => PropertyState::Value,
            (PropertyState::Separator, b) if is_blank(b) => {
                PropertyState::Separator
            }
            (PropertyState::Separator, b) => {
                return Err(Error::unexpected(
                    b,
                    last_offset(source),
                    Construct::Property,
                ));
            }
            (PropertyState::Value, b'"') => break,
            (PropertyState::Value, b) => {
                value.push(b);
                PropertyState::Value
            }
        };
    }

    Ok(Property::new(bytes_to_text(&key), bytes_to_text(&value)))
}

fn parse_brush<S: ByteSource>(source: &mut S) -> qmap::Result<Brush> {
    let mut brush = Brush {
        faces: Vec::with_capacity(MIN_BRUSH_FACES),
    };

    loop {
        match next_structural(source)? {
            Some(b'(') => {
                let start = last_offset(source);
                brush.faces.push(parse_face(source, start)?);
            }
            Some(b'}') => break,
            // Square brackets carry no meaning at brush level
            Some(b) if b.is_ascii_whitespace() || b == b'[' || b == b']' => {}
            Some(b) => {
                return Err(Error::unexpected(
                    b,
                    last_offset(source),
                    Construct::Brush,
                ));
            }
            None => {
                return Err(Error::eof(source.offset(), Construct::Brush));
            }
        }
    }

    log::trace!("Brush with {} faces", brush.faces.len());

    Ok(brush)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FaceState {
    ReadingPlane,
    ReadingTexturePath,
    DetectingFormat,
    ReadingQuakeFields,
    ReadingValveFields,
    Done,
}

/// Parse a face whose opening parenthesis sat at offset `start`
fn parse_face<S: ByteSource>(source: &mut S, start: u64) -> qmap::Result<Face> {
    read_face(source).map_err(|inner| Error::MalformedFace {
        offset: start,
        source: Box::new(inner),
    })
}

fn read_face<S: ByteSource>(source: &mut S) -> qmap::Result<Face> {
    let mut face = Face::default();
    let mut texture = Vec::with_capacity(TEXTURE_CAPACITY);
    let mut state = FaceState::ReadingPlane;

    while state != FaceState::Done {
        state = match state {
            FaceState::ReadingPlane => {
                let a = read_vec3(source)?;
                let b = read_vec3(source)?;
                let c = read_vec3(source)?;
                face.plane = Plane::new(a, b, c);

                // Separator after the last point, normally `)`
                if source.read_byte()?.is_none() {
                    return Err(Error::eof(source.offset(), Construct::Face));
                }

                FaceState::ReadingTexturePath
            }
            FaceState::ReadingTexturePath => match next_structural(source)? {
                Some(b) if is_blank(b) => {
                    if texture.is_empty() {
                        FaceState::ReadingTexturePath
                    } else {
                        face.texture = bytes_to_text(&texture);
                        FaceState::DetectingFormat
                    }
                }
                Some(b) if is_line_end(b) => {
                    return Err(Error::unexpected(
                        b,
                        last_offset(source),
                        Construct::Face,
                    ));
                }
                Some(b) => {
                    texture.push(b);
                    FaceState::ReadingTexturePath
                }
                None => {
                    return Err(Error::eof(source.offset(), Construct::Face));
                }
            },
            // Only an immediate `[` or digit after a blank decides the
            // format.  Anything else is rejected rather than guessed.
            FaceState::DetectingFormat => match source.peek_byte()? {
                Some(b'[') => FaceState::ReadingValveFields,
                Some(b) if b.is_ascii_digit() => FaceState::ReadingQuakeFields,
                Some(b) if is_blank(b) => {
                    source.read_byte()?;
                    FaceState::DetectingFormat
                }
                Some(b) => {
                    return Err(Error::unexpected(
                        b,
                        source.offset(),
                        Construct::TextureFormat,
                    ));
                }
                None => {
                    return Err(Error::eof(
                        source.offset(),
                        Construct::TextureFormat,
                    ));
                }
            },
            FaceState::ReadingQuakeFields => {
                let offset = read_vec2(source)?;
                face.rotation = read_float(source)?;
                let (scale, terminator) = scan_vec2(source)?;
                face.scale = scale;
                face.alignment = Alignment::Quake { offset };

                // Some dialects append extra surface fields
                skip_line(source, terminator)?;

                log::trace!("Quake format face `{}`", face.texture);
                FaceState::Done
            }
            FaceState::ReadingValveFields => {
                let u_axis = read_vec3(source)?;
                let u_offset = read_float(source)?;
                let v_axis = read_vec3(source)?;
                let v_offset = read_float(source)?;
                face.rotation = read_float(source)?;
                face.scale = read_vec2(source)?;
                face.alignment = Alignment::Valve {
                    u: TextureAxis::new(u_axis, u_offset),
                    v: TextureAxis::new(v_axis, v_offset),
                };

                log::trace!("Valve format face `{}`", face.texture);
                FaceState::Done
            }
            FaceState::Done => FaceState::Done,
        };
    }

    Ok(face)
}

/// Map text is single-byte: every byte becomes the char with the same code
/// point, so high bytes survive unchanged
fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
