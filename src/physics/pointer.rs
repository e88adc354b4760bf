use bevy::prelude::*;

/// Where the pointer is, in surface space. `Absent` once it leaves the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
    Present(Vec2),
    #[default]
    Absent,
}

impl Pointer {
    pub fn from_cursor(cursor: Option<Vec2>) -> Self {
        cursor.map_or(Self::Absent, Self::Present)
    }

    pub fn position(&self) -> Option<Vec2> {
        match *self {
            Self::Present(at) => Some(at),
            Self::Absent => None,
        }
    }
}
