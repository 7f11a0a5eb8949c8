#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::qmap::{Vec2, Vec3};

/// A parsed map file
#[derive(Clone, Debug, PartialEq)]
pub struct QuakeMap {
    /// Where the map was read from, e.g. the file path
    pub source: String,
    pub entities: Vec<Entity>,
}

impl QuakeMap {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            entities: Vec::new(),
        }
    }

    /// First entity with `classname` set to `worldspawn`
    pub fn worldspawn(&self) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|ent| ent.classname() == Some("worldspawn"))
    }

    pub fn brush_count(&self) -> usize {
        self.entities.iter().map(|ent| ent.brushes.len()).sum()
    }
}

/// Key/value properties plus any brushes, both in file order.  Keys may
/// repeat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    pub properties: Vec<Property>,
    pub brushes: Vec<Brush>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first property named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|prop| prop.key == key)
            .map(|prop| prop.value.as_str())
    }

    pub fn classname(&self) -> Option<&str> {
        self.get("classname")
    }

    /// Point entities carry no geometry
    pub fn is_point(&self) -> bool {
        self.brushes.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Brush {
    pub faces: Vec<Face>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every distinct point used to define the faces' planes, in the order
    /// first seen.  These are the defining points only, not the corners of
    /// the solid.
    pub fn vertices(&self) -> Vec<Vec3> {
        let mut seen = HashSet::new();
        let mut vertices = Vec::new();

        for point in self.faces.iter().flat_map(|face| face.plane.points()) {
            if seen.insert(point) {
                vertices.push(point);
            }
        }

        vertices
    }
}

/// Three points on a plane.  Comparison is field by field, so the same
/// points listed in another order make a different `Plane`.  `Eq` carries
/// the same NaN caveat as [`Vec3`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Plane {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Plane {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    pub fn points(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Quake,
    Valve,
}

/// One texture projection axis of the Valve 220 format
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextureAxis {
    pub axis: Vec3,
    pub offset: f64,
}

impl TextureAxis {
    pub const fn new(axis: Vec3, offset: f64) -> Self {
        Self { axis, offset }
    }
}

/// Format-specific texture alignment
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Quake { offset: Vec2 },
    Valve { u: TextureAxis, v: TextureAxis },
}

impl Alignment {
    pub fn format(&self) -> TextureFormat {
        match self {
            Alignment::Quake { .. } => TextureFormat::Quake,
            Alignment::Valve { .. } => TextureFormat::Valve,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Quake {
            offset: Vec2::ZERO,
        }
    }
}

/// One bounding plane of a brush and the texture applied to it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Face {
    pub plane: Plane,
    pub texture: String,
    pub rotation: f64,
    pub scale: Vec2,
    pub alignment: Alignment,
}

impl Face {
    pub fn format(&self) -> TextureFormat {
        self.alignment.format()
    }

    /// Texture offset for a Quake format face
    pub fn offset(&self) -> Option<Vec2> {
        match self.alignment {
            Alignment::Quake { offset } => Some(offset),
            Alignment::Valve { .. } => None,
        }
    }

    /// Texture axes for a Valve format face
    pub fn valve_axes(&self) -> Option<[TextureAxis; 2]> {
        match self.alignment {
            Alignment::Quake { .. } => None,
            Alignment::Valve { u, v } => Some([u, v]),
        }
    }

    /// Looser comparison that only looks at plane, texture, scale and
    /// rotation, ignoring the alignment entirely
    #[allow(clippy::float_cmp)]
    pub fn same_surface(&self, other: &Face) -> bool {
        self.plane == other.plane
            && self.texture == other.texture
            && self.scale == other.scale
            && self.rotation == other.rotation
    }
}
