use std::error::Error;
use std::fmt;

use blacktooth_atlas::AtlasError;
use blacktooth_model::{Direction, RoomId};

/// Asset contract violations. Any of these aborts composition of the room.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    MissingArt {
        room: RoomId,
        source: AtlasError,
    },
    /// A far-wall slot with no style, or a style the planet does not have.
    UnknownWallStyle {
        room: RoomId,
        side: Direction,
        slot: usize,
        style: Option<String>,
    },
    /// The wall walk only reaches ordinals in `-1..=slots - 2`.
    DoorOutOfRange {
        room: RoomId,
        side: Direction,
        ordinal: i32,
        slots: u32,
    },
    TeleporterWithoutDestination {
        room: RoomId,
        item: usize,
    },
}

impl RenderError {
    pub(crate) fn art(room: &RoomId) -> impl FnOnce(AtlasError) -> RenderError + '_ {
        move |source| RenderError::MissingArt {
            room: room.clone(),
            source,
        }
    }

    pub fn room(&self) -> &RoomId {
        match self {
            RenderError::MissingArt { room, .. }
            | RenderError::UnknownWallStyle { room, .. }
            | RenderError::DoorOutOfRange { room, .. }
            | RenderError::TeleporterWithoutDestination { room, .. } => room,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingArt { room, source } => write!(f, "room {}: {}", room, source),
            RenderError::UnknownWallStyle {
                room,
                side,
                slot,
                style: Some(style),
            } => write!(
                f,
                "room {}: {} wall slot {} has unknown style \"{}\"",
                room, side, slot, style
            ),
            RenderError::UnknownWallStyle {
                room,
                side,
                slot,
                style: None,
            } => write!(f, "room {}: {} wall slot {} has no style", room, side, slot),
            RenderError::DoorOutOfRange {
                room,
                side,
                ordinal,
                slots,
            } => write!(
                f,
                "room {}: {} door ordinal {} is outside -1..={} for a {}-slot wall",
                room,
                side,
                ordinal,
                i64::from(*slots) - 1,
                slots
            ),
            RenderError::TeleporterWithoutDestination { room, item } => {
                write!(f, "room {}: teleporter (item {}) has no destination", room, item)
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::MissingArt { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blacktooth_atlas::TextureId;

    #[test]
    fn messages_name_the_room() {
        let e = RenderError::DoorOutOfRange {
            room: RoomId::from("bt1"),
            side: Direction::Left,
            ordinal: 5,
            slots: 5,
        };
        assert_eq!(
            e.to_string(),
            "room bt1: left door ordinal 5 is outside -1..=4 for a 5-slot wall"
        );
        let e = RenderError::art(&RoomId::from("bt2"))(AtlasError::MissingTexture(
            TextureId::DeadlyFloor,
        ));
        assert_eq!(e.room().as_str(), "bt2");
        assert!(e.source().is_some());
    }
}
