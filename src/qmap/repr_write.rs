//! Map writer used to build test fixtures from in-memory maps

use crate::qmap::repr::{Alignment, Brush, Entity, Face, Plane, QuakeMap};
use crate::qmap::Vec3;
use std::io;
use std::vec::Vec;

pub trait Writes<W: io::Write> {
    fn write_to(&self, writer: &mut W) -> io::Result<()>;
}

impl<W: io::Write> Writes<W> for QuakeMap {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        for ent in &self.entities {
            ent.write_to(writer)?;
        }
        Ok(())
    }
}

impl<W: io::Write> Writes<W> for Entity {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"{\r\n")?;

        for prop in &self.properties {
            writer.write_all(b"\"")?;
            write_text(writer, &prop.key)?;
            writer.write_all(b"\" \"")?;
            write_text(writer, &prop.value)?;
            writer.write_all(b"\"\r\n")?;
        }

        for brush in &self.brushes {
            brush.write_to(writer)?;
        }

        writer.write_all(b"}\r\n")?;
        Ok(())
    }
}

impl<W: io::Write> Writes<W> for Brush {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"{\r\n")?;

        for face in &self.faces {
            face.write_to(writer)?;
            writer.write_all(b"\r\n")?;
        }

        writer.write_all(b"}\r\n")?;
        Ok(())
    }
}

impl<W: io::Write> Writes<W> for Face {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        self.plane.write_to(writer)?;
        writer.write_all(b" ")?;
        write_text(writer, &self.texture)?;
        writer.write_all(b" ")?;

        match self.alignment {
            Alignment::Quake { offset } => write!(
                writer,
                "{} {} {} {} {}",
                offset.x, offset.y, self.rotation, self.scale.x, self.scale.y
            ),
            Alignment::Valve { u, v } => {
                writer.write_all(b"[ ")?;
                write_map_order(writer, u.axis)?;
                write!(writer, " {} ] [ ", u.offset)?;
                write_map_order(writer, v.axis)?;
                write!(
                    writer,
                    " {} ] {} {} {}",
                    v.offset, self.rotation, self.scale.x, self.scale.y
                )
            }
        }
    }
}

impl<W: io::Write> Writes<W> for Plane {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        for (index, pt) in self.points().iter().enumerate() {
            writer.write_all(b"( ")?;
            write_map_order(writer, *pt)?;
            writer.write_all(b" )")?;

            if index != 2 {
                writer.write_all(b" ")?;
            }
        }
        Ok(())
    }
}

// One byte per char, the inverse of how the parser decodes text
fn write_text<W: io::Write>(writer: &mut W, text: &str) -> io::Result<()> {
    let bytes: Vec<u8> = text.chars().map(|c| c as u8).collect();
    writer.write_all(&bytes)
}

// Undo the axis swap applied when reading
fn write_map_order<W: io::Write>(writer: &mut W, vec: Vec3) -> io::Result<()> {
    write!(writer, "{} {} {}", vec.x, vec.z, vec.y)
}

pub fn to_bytes<T: Writes<Vec<u8>>>(element: &T) -> Vec<u8> {
    let mut dest = Vec::new();
    element.write_to(&mut dest).unwrap();
    dest
}
