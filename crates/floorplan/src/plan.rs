use crate::coords::WorldPoint;
use crate::{Level, LevelId, LinkId, Room, RoomId, VerticalLink};
use serde::{Deserialize, Serialize};

/// The floor-plan document: levels, rooms, and the vertical links between
/// levels.
///
/// Entities are stored in plain lists; list order is z-order (back to
/// front) for rooms and links on the same level. This is the boundary that
/// constructs and mutates entities; rendering reads immutable snapshots of
/// it and never validates geometry itself.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FloorPlan {
    pub name: String,
    pub levels: Vec<Level>,
    pub rooms: Vec<Room>,
    pub links: Vec<VerticalLink>,
}

impl FloorPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            levels: Vec::new(),
            rooms: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Adds a level and returns its id.
    pub fn add_level(&mut self, level: Level) -> LevelId {
        let id = level.id;
        self.levels.push(level);
        id
    }

    pub fn level(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Levels sorted by elevation, basement to top floor.
    pub fn levels_by_elevation(&self) -> Vec<&Level> {
        let mut levels: Vec<_> = self.levels.iter().collect();
        levels.sort_by_key(|l| l.elevation);
        levels
    }

    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id;
        self.rooms.push(room);
        id
    }

    pub fn remove_room(&mut self, id: RoomId) -> Option<Room> {
        let index = self.rooms.iter().position(|r| r.id == id)?;
        Some(self.rooms.remove(index))
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    pub fn add_link(&mut self, link: VerticalLink) -> LinkId {
        let id = link.id;
        self.links.push(link);
        id
    }

    pub fn remove_link(&mut self, id: LinkId) -> Option<VerticalLink> {
        let index = self.links.iter().position(|l| l.id == id)?;
        Some(self.links.remove(index))
    }

    pub fn link(&self, id: LinkId) -> Option<&VerticalLink> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn link_mut(&mut self, id: LinkId) -> Option<&mut VerticalLink> {
        self.links.iter_mut().find(|l| l.id == id)
    }

    /// Rooms belonging to a level, in z-order.
    pub fn rooms_on(&self, level: LevelId) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.level == level)
    }

    /// Vertical links with an end on the given level, in z-order.
    pub fn links_touching(&self, level: LevelId) -> impl Iterator<Item = &VerticalLink> {
        self.links.iter().filter(move |l| l.connects(level))
    }

    /// The topmost link on a level containing a world point.
    pub fn link_at_point(&self, level: LevelId, point: WorldPoint) -> Option<LinkId> {
        self.links
            .iter()
            .rev()
            .find(|l| l.connects(level) && l.contains_point(point))
            .map(|l| l.id)
    }

    /// The topmost room on a level containing a world point.
    pub fn room_at_point(&self, level: LevelId, point: WorldPoint) -> Option<RoomId> {
        self.rooms
            .iter()
            .rev()
            .find(|r| r.level == level && r.contains_point(point))
            .map(|r| r.id)
    }
}
