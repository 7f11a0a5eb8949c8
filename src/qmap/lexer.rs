#[cfg(feature = "std")]
use std::{boxed::Box, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

use core::str::FromStr;

use crate::qmap;
use qmap::result::Construct;
use qmap::{ByteSource, Error, Vec2, Vec3};

const NUMBER_CAPACITY: usize = 16;

pub(crate) fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

pub(crate) fn is_line_end(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

fn is_number_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'-' || byte == b'.'
}

// Bytes that may sit between numbers inside a face line
fn is_number_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || matches!(byte, b'(' | b')' | b'[' | b']')
}

/// Offset of the byte most recently returned by `read_byte`
pub(crate) fn last_offset<S: ByteSource>(source: &S) -> u64 {
    source.offset().saturating_sub(1)
}

/// If `byte` opens a `//` comment, discard through the end of the line and
/// return the byte that follows it instead.  Repeats for back-to-back
/// comment lines.
pub(crate) fn skip_comments<S: ByteSource>(
    source: &mut S,
    mut byte: Option<u8>,
) -> qmap::Result<Option<u8>> {
    while byte == Some(b'/') && source.peek_byte()? == Some(b'/') {
        loop {
            match source.read_byte()? {
                Some(b) if is_line_end(b) => break,
                Some(_) => {}
                None => return Ok(None),
            }
        }

        byte = source.read_byte()?;
    }

    Ok(byte)
}

/// Next byte with comments skipped
pub(crate) fn next_structural<S: ByteSource>(
    source: &mut S,
) -> qmap::Result<Option<u8>> {
    let byte = source.read_byte()?;
    skip_comments(source, byte)
}

/// Read a number, returning it with the non-numeric byte that ended it.
/// The terminating byte is consumed.
pub(crate) fn scan_float<S: ByteSource>(
    source: &mut S,
) -> qmap::Result<(f64, u8)> {
    let mut text = Vec::with_capacity(NUMBER_CAPACITY);

    loop {
        match source.read_byte()? {
            Some(b) if b.is_ascii_digit() || b == b'-' => {
                text.push(b);
                break;
            }
            Some(b) if is_number_separator(b) => {}
            Some(b) => {
                return Err(Error::unexpected(
                    b,
                    last_offset(source),
                    Construct::Number,
                ));
            }
            None => {
                return Err(Error::eof(source.offset(), Construct::Number));
            }
        }
    }

    let start = last_offset(source);

    let terminator = loop {
        match source.read_byte()? {
            Some(b) if is_number_byte(b) => text.push(b),
            Some(b) => break b,
            None => return Err(malformed_number(&text, start)),
        }
    };

    let number = core::str::from_utf8(&text)
        .ok()
        .and_then(|s| f64::from_str(s).ok())
        .ok_or_else(|| malformed_number(&text, start))?;

    Ok((number, terminator))
}

pub(crate) fn read_float<S: ByteSource>(source: &mut S) -> qmap::Result<f64> {
    scan_float(source).map(|(number, _)| number)
}

fn malformed_number(text: &[u8], offset: u64) -> Error {
    Error::MalformedNumber {
        text: String::from_utf8_lossy(text).into_owned(),
        offset,
    }
}

fn wrap_vector(dimensions: u8, offset: u64) -> impl FnOnce(Error) -> Error {
    move |inner| Error::MalformedVector {
        dimensions,
        offset,
        source: Box::new(inner),
    }
}

/// Read two numbers, also returning the byte that ended the second
pub(crate) fn scan_vec2<S: ByteSource>(
    source: &mut S,
) -> qmap::Result<(Vec2, u8)> {
    let start = source.offset();

    let scanned = read_float(source).and_then(|x| {
        scan_float(source).map(|(y, terminator)| (Vec2::new(x, y), terminator))
    });

    scanned.map_err(wrap_vector(2, start))
}

pub(crate) fn read_vec2<S: ByteSource>(source: &mut S) -> qmap::Result<Vec2> {
    scan_vec2(source).map(|(vec, _)| vec)
}

/// Read three numbers in map order into an engine-space [`Vec3`]
pub(crate) fn read_vec3<S: ByteSource>(source: &mut S) -> qmap::Result<Vec3> {
    let start = source.offset();

    let scanned = (|| -> qmap::Result<Vec3> {
        let x = read_float(source)?;
        let y = read_float(source)?;
        let z = read_float(source)?;
        Ok(Vec3::new(x, y, z))
    })();

    scanned.map_err(wrap_vector(3, start))
}

/// Discard the rest of the current line.  `terminator` is the byte that
/// ended the last token; if it already was a line break nothing is read.
pub(crate) fn skip_line<S: ByteSource>(
    source: &mut S,
    terminator: u8,
) -> qmap::Result<()> {
    if is_line_end(terminator) {
        return Ok(());
    }

    while let Some(byte) = source.read_byte()? {
        if is_line_end(byte) {
            break;
        }
    }

    Ok(())
}
