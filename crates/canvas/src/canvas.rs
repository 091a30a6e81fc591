use crate::interaction::{Selection, Target};
use crate::render;
use crate::viewport::Viewport;
use floorplan::{FloorPlan, LevelId, Room, ScreenPoint, VerticalLink};
use glam::Vec2;
use theme::Theme;

/// Editor state for one floor-plan view: the document, which level is being
/// edited, hover/selection, and the camera.
pub struct PlanCanvas {
    pub plan: FloorPlan,
    pub active_level: LevelId,
    pub selection: Selection,
    pub hovered: Option<Target>,
    pub viewport: Viewport,
    pub theme: Theme,
}

/// Immutable snapshot of everything one redraw needs.
///
/// Cloned out of the canvas per frame so the paint pass reads values, never
/// shared mutable editor state.
#[derive(Clone)]
pub struct RenderSnapshot {
    pub rooms: Vec<Room>,
    pub links: Vec<VerticalLink>,
    pub selection: Selection,
    pub hovered: Option<Target>,
    pub viewport: Viewport,
    pub theme: Theme,
}

impl PlanCanvas {
    pub fn new(plan: FloorPlan, active_level: LevelId, theme: Theme) -> Self {
        Self {
            plan,
            active_level,
            selection: Selection::new(),
            hovered: None,
            viewport: Viewport::new(),
            theme,
        }
    }

    /// Switches the edited level, dropping hover and selection (both refer
    /// to entities of the previous level's view).
    pub fn set_active_level(&mut self, level: LevelId) {
        if self.active_level != level {
            self.active_level = level;
            self.selection.clear();
            self.hovered = None;
        }
    }

    /// Selects a target, replacing the selection unless `extend` is set.
    pub fn select(&mut self, target: Target, extend: bool) {
        if !extend {
            self.selection.clear();
        }
        self.selection.insert(target);
    }

    pub fn toggle_select(&mut self, target: Target) {
        self.selection.toggle(target);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Removes selected rooms and links from the plan. Vertex entries count
    /// as their owning link.
    pub fn delete_selected(&mut self) {
        let targets: Vec<Target> = self.selection.iter().copied().collect();
        for target in targets {
            match target {
                Target::Room(id) => {
                    self.plan.remove_room(id);
                }
                Target::Link(id) | Target::LinkVertex { link: id, .. } => {
                    self.plan.remove_link(id);
                }
            }
        }
        self.selection.clear();
        if let Some(hovered) = self.hovered {
            let gone = match hovered {
                Target::Room(id) => self.plan.room(id).is_none(),
                Target::Link(id) | Target::LinkVertex { link: id, .. } => {
                    self.plan.link(id).is_none()
                }
            };
            if gone {
                self.hovered = None;
            }
        }
    }

    /// What the pointer at a screen position addresses, if anything.
    ///
    /// Vertex markers are tested first (in screen space, against the marker
    /// pick radius, topmost link first), then link footprints, then rooms.
    /// Uses the viewport's inverse transform, so picking always agrees with
    /// rendering.
    pub fn target_at(&self, screen_point: ScreenPoint) -> Option<Target> {
        let hit_radius = render::vertex_hit_radius(self.viewport.zoom);
        let links: Vec<&VerticalLink> =
            self.plan.links_touching(self.active_level).collect();

        for link in links.iter().rev() {
            for (index, corner) in link.corners().into_iter().enumerate() {
                let marker = self.viewport.world_to_screen(corner);
                let d = screen_point.0 - marker.0;
                if d.x.abs() <= hit_radius && d.y.abs() <= hit_radius {
                    return Some(Target::LinkVertex {
                        link: link.id,
                        vertex: index,
                    });
                }
            }
        }

        let world = self.viewport.screen_to_world(screen_point);
        if let Some(id) = self.plan.link_at_point(self.active_level, world) {
            return Some(Target::Link(id));
        }
        self.plan
            .room_at_point(self.active_level, world)
            .map(Target::Room)
    }

    /// Updates hover state from a pointer position. Returns true when the
    /// hover target changed (the caller should repaint).
    pub fn update_hover(&mut self, screen_point: ScreenPoint) -> bool {
        let new_hovered = self.target_at(screen_point);
        if self.hovered != new_hovered {
            self.hovered = new_hovered;
            true
        } else {
            false
        }
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.viewport.pan(delta);
    }

    pub fn zoom_at(&mut self, screen_point: ScreenPoint, factor: f32) {
        self.viewport.zoom_at(screen_point, factor);
    }

    /// Clones the state one redraw needs: rooms and links visible on the
    /// active level plus interaction and camera state.
    pub fn render_state(&self) -> RenderSnapshot {
        RenderSnapshot {
            rooms: self.plan.rooms_on(self.active_level).cloned().collect(),
            links: self.plan.links_touching(self.active_level).cloned().collect(),
            selection: self.selection.clone(),
            hovered: self.hovered,
            viewport: self.viewport.clone(),
            theme: self.theme.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan::{Level, LinkKind, WorldPoint, WorldSize};

    fn canvas_with_link() -> (PlanCanvas, floorplan::LinkId) {
        let mut plan = FloorPlan::new("Musée");
        let ground = plan.add_level(Level::new("Rez-de-chaussée", 0));
        let first = plan.add_level(Level::new("Premier étage", 1));
        plan.add_room(Room::new(
            ground,
            "Hall",
            WorldPoint::new(0.0, 0.0),
            WorldSize::new(400.0, 300.0),
        ));
        let link = plan.add_link(VerticalLink::new(
            LinkKind::Stairs,
            ground,
            first,
            WorldPoint::new(100.0, 100.0),
            WorldSize::new(40.0, 60.0),
        ));
        (PlanCanvas::new(plan, ground, Theme::default()), link)
    }

    #[test]
    fn test_vertex_picked_before_link_footprint() {
        let (canvas, link) = canvas_with_link();

        // Right on the top-left corner of the link.
        let target = canvas.target_at(ScreenPoint::new(100.0, 100.0));
        assert_eq!(target, Some(Target::LinkVertex { link, vertex: 0 }));

        // A couple of pixels off still snaps to the marker.
        let target = canvas.target_at(ScreenPoint::new(104.0, 97.0));
        assert_eq!(target, Some(Target::LinkVertex { link, vertex: 0 }));

        // Center of the link rectangle: footprint, not a vertex.
        let target = canvas.target_at(ScreenPoint::new(120.0, 130.0));
        assert_eq!(target, Some(Target::Link(link)));
    }

    #[test]
    fn test_room_picked_outside_link() {
        let (canvas, _) = canvas_with_link();
        let target = canvas.target_at(ScreenPoint::new(300.0, 250.0));
        assert!(matches!(target, Some(Target::Room(_))));

        // Outside everything.
        assert_eq!(canvas.target_at(ScreenPoint::new(1000.0, 1000.0)), None);
    }

    #[test]
    fn test_picking_respects_viewport() {
        let (mut canvas, link) = canvas_with_link();
        canvas.viewport.zoom = 2.0;

        // The top-left corner now renders at (200, 200).
        let target = canvas.target_at(ScreenPoint::new(200.0, 200.0));
        assert_eq!(target, Some(Target::LinkVertex { link, vertex: 0 }));
        // Where the corner used to be there is nothing any more (world
        // point (50, 50) is inside the room only).
        let target = canvas.target_at(ScreenPoint::new(100.0, 100.0));
        assert!(matches!(target, Some(Target::Room(_))));
    }

    #[test]
    fn test_update_hover_reports_changes() {
        let (mut canvas, link) = canvas_with_link();

        assert!(canvas.update_hover(ScreenPoint::new(100.0, 100.0)));
        assert_eq!(canvas.hovered, Some(Target::LinkVertex { link, vertex: 0 }));

        // Same target again: no change, no repaint needed.
        assert!(!canvas.update_hover(ScreenPoint::new(101.0, 101.0)));

        assert!(canvas.update_hover(ScreenPoint::new(1000.0, 1000.0)));
        assert_eq!(canvas.hovered, None);
    }

    #[test]
    fn test_select_replace_and_extend() {
        let (mut canvas, link) = canvas_with_link();
        let v0 = Target::LinkVertex { link, vertex: 0 };
        let v2 = Target::LinkVertex { link, vertex: 2 };

        canvas.select(v0, false);
        canvas.select(v2, true);
        assert_eq!(canvas.selection.len(), 2);

        canvas.select(v2, false);
        assert_eq!(canvas.selection.len(), 1);
        assert!(canvas.selection.contains(&v2));
    }

    #[test]
    fn test_delete_selected_link_via_vertex_entry() {
        let (mut canvas, link) = canvas_with_link();
        canvas.select(Target::LinkVertex { link, vertex: 1 }, false);
        canvas.hovered = Some(Target::LinkVertex { link, vertex: 1 });

        canvas.delete_selected();

        assert!(canvas.plan.link(link).is_none());
        assert!(canvas.selection.is_empty());
        assert_eq!(canvas.hovered, None);
    }

    #[test]
    fn test_switching_level_clears_interaction_state() {
        let (mut canvas, link) = canvas_with_link();
        let upper = canvas.plan.levels_by_elevation()[1].id;
        canvas.select(Target::Link(link), false);
        canvas.hovered = Some(Target::Link(link));

        canvas.set_active_level(upper);

        assert!(canvas.selection.is_empty());
        assert_eq!(canvas.hovered, None);
        // The link connects both levels, so it still renders on the new one.
        assert_eq!(canvas.render_state().links.len(), 1);
        assert_eq!(canvas.render_state().rooms.len(), 0);
    }
}
