#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
    string::ToString,
};

use crate::qmap::Result;

#[cfg(feature = "std")]
use crate::qmap::Error;

/// Sequential byte input with one byte of lookahead
pub trait ByteSource {
    /// Consume the next byte, `None` at end of stream
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Look at the next byte without consuming it
    fn peek_byte(&mut self) -> Result<Option<u8>>;

    /// Number of bytes consumed so far
    fn offset(&self) -> u64;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        (**self).peek_byte()
    }

    fn offset(&self) -> u64 {
        (**self).offset()
    }
}

/// In-memory source
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.bytes.get(self.position).copied();

        if byte.is_some() {
            self.position += 1;
        }

        Ok(byte)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.bytes.get(self.position).copied())
    }

    fn offset(&self) -> u64 {
        self.position as u64
    }
}

/// Adapts any [`Read`] into a [`ByteSource`] by buffering one peeked byte
#[cfg(feature = "std")]
pub struct ReaderSource<R: Read> {
    bytes: io::Bytes<R>,
    peeked: Option<u8>,
    offset: u64,
}

#[cfg(feature = "std")]
impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            peeked: None,
            offset: 0,
        }
    }

    fn next_from_reader(&mut self) -> Result<Option<u8>> {
        self.bytes.next().transpose().map_err(Error::from_io)
    }
}

#[cfg(feature = "std")]
impl ReaderSource<BufReader<File>> {
    /// Open a file for reading.  The handle is released when the source is
    /// dropped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match File::open(path) {
            Ok(file) => Ok(Self::new(BufReader::new(file))),
            Err(e) => Err(Error::SourceNotFound {
                name: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(feature = "std")]
impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let byte = match self.peeked.take() {
            Some(byte) => Some(byte),
            None => self.next_from_reader()?,
        };

        if byte.is_some() {
            self.offset += 1;
        }

        Ok(byte)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.next_from_reader()?;
        }

        Ok(self.peeked)
    }

    fn offset(&self) -> u64 {
        self.offset
    }
}
