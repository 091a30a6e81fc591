//! The floor-plan paint pass.
//!
//! One call per redraw: rooms of the active level first, then vertical
//! links, then each link's four corner vertices. All state arrives in an
//! immutable [`RenderSnapshot`]; the only side effects are draw calls on the
//! surface.

use crate::canvas::RenderSnapshot;
use crate::interaction::{Selection, Target};
use crate::surface::{DrawSurface, DrawSurfaceExt};
use crate::viewport::Viewport;
use floorplan::{Room, ScreenPoint, VerticalLink};
use glam::Vec2;
use maquette_core::Bounds;
use theme::{Stroke, Theme};

/// Side length of a vertex marker at rest, in screen pixels.
pub const VERTEX_SIZE: f32 = 8.0;
/// Rest size when zoomed far out, so markers don't swamp a shrunken plan.
pub const VERTEX_SIZE_COMPACT: f32 = 6.0;
/// Zoom threshold below which the compact size class applies.
const COMPACT_ZOOM: f32 = 0.5;
/// Extra side length of a hovered marker (magnetic pointer affordance).
pub const VERTEX_HOVER_GROWTH: f32 = 4.0;

const STROKE_BASE: f32 = 1.0;
const STROKE_EMPHASIS: f32 = 2.0;

/// On-screen side length of a vertex marker.
///
/// Zoom picks the size class only; the marker does not scale with zoom, so
/// it stays the same screen size (and stays clickable) at any magnification.
pub fn vertex_size(zoom: f32, hovered: bool) -> f32 {
    let base = if zoom < COMPACT_ZOOM {
        VERTEX_SIZE_COMPACT
    } else {
        VERTEX_SIZE
    };
    if hovered {
        base + VERTEX_HOVER_GROWTH
    } else {
        base
    }
}

/// Half-width of the square pointer-pick area around a vertex, slightly
/// larger than the marker itself.
pub fn vertex_hit_radius(zoom: f32) -> f32 {
    vertex_size(zoom, false)
}

/// Paints one redraw of the floor plan.
pub fn paint_plan<S: DrawSurface + ?Sized>(snapshot: &RenderSnapshot, surface: &mut S) {
    for room in &snapshot.rooms {
        paint_room(
            room,
            &snapshot.viewport,
            snapshot.hovered,
            &snapshot.selection,
            &snapshot.theme,
            surface,
        );
    }

    for link in &snapshot.links {
        paint_link(
            link,
            &snapshot.viewport,
            snapshot.hovered,
            &snapshot.selection,
            &snapshot.theme,
            surface,
        );
    }

    // Vertices render above every footprint so they stay grabbable.
    for link in &snapshot.links {
        paint_link_vertices(
            link,
            &snapshot.viewport,
            snapshot.hovered,
            &snapshot.selection,
            &snapshot.theme,
            surface,
        );
    }
}

fn paint_room<S: DrawSurface + ?Sized>(
    room: &Room,
    viewport: &Viewport,
    hovered: Option<Target>,
    selection: &Selection,
    theme: &Theme,
    surface: &mut S,
) {
    let screen_bounds = viewport.world_to_screen_bounds(room.bounds());
    surface.paint_rect(
        screen_bounds,
        Some(theme.room_fill),
        Some(Stroke::new(theme.room_stroke, STROKE_BASE)),
    );

    let target = Target::Room(room.id);
    let is_selected = selection.contains(&target);
    if hovered == Some(target) && !is_selected {
        surface.paint_rect(
            screen_bounds,
            None,
            Some(Stroke::new(theme.hover, STROKE_EMPHASIS)),
        );
    }
    if is_selected {
        surface.paint_rect(
            screen_bounds,
            None,
            Some(Stroke::new(theme.selection, STROKE_EMPHASIS)),
        );
    }
}

fn paint_link<S: DrawSurface + ?Sized>(
    link: &VerticalLink,
    viewport: &Viewport,
    hovered: Option<Target>,
    selection: &Selection,
    theme: &Theme,
    surface: &mut S,
) {
    let screen_bounds = viewport.world_to_screen_bounds(link.bounds());
    let fill = match link.kind {
        floorplan::LinkKind::Stairs => theme.stairs_fill,
        floorplan::LinkKind::Elevator => theme.elevator_fill,
        floorplan::LinkKind::Ramp => theme.ramp_fill,
    };
    surface.paint_rect(
        screen_bounds,
        Some(fill),
        Some(Stroke::new(theme.link_stroke, STROKE_BASE)),
    );

    let target = Target::Link(link.id);
    let is_selected = selection.contains(&target);
    if hovered == Some(target) && !is_selected {
        surface.paint_rect(
            screen_bounds,
            None,
            Some(Stroke::new(theme.hover, STROKE_EMPHASIS)),
        );
    }
    if is_selected {
        surface.paint_rect(
            screen_bounds,
            None,
            Some(Stroke::new(theme.selection, STROKE_EMPHASIS)),
        );
    }
}

/// Draws the four corner vertices of a vertical link.
///
/// Corners are visited in index order 0..4; a corner is hovered or selected
/// only when the ambient state names this exact link and this exact index.
/// Absent hover and an empty selection simply mean four default markers.
pub fn paint_link_vertices<S: DrawSurface + ?Sized>(
    link: &VerticalLink,
    viewport: &Viewport,
    hovered: Option<Target>,
    selection: &Selection,
    theme: &Theme,
    surface: &mut S,
) {
    for (index, corner) in link.corners().into_iter().enumerate() {
        let is_hovered = hovered.is_some_and(|t| t.is_vertex_of(link.id, index));
        let is_selected = selection.contains_vertex(link.id, index);
        let center = viewport.world_to_screen(corner);
        paint_vertex(surface, center, viewport.zoom, is_hovered, is_selected, theme);
    }
}

/// Draws one square vertex marker centered on a screen position.
///
/// Styling priority: selected wins over hovered wins over default. The
/// translate is scoped so it cannot leak into the next marker.
fn paint_vertex<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center: ScreenPoint,
    zoom: f32,
    hovered: bool,
    selected: bool,
    theme: &Theme,
) {
    let size = vertex_size(zoom, hovered);
    let (fill, stroke_width) = if selected {
        (theme.selection, STROKE_EMPHASIS)
    } else if hovered {
        (theme.hover, STROKE_EMPHASIS)
    } else {
        (theme.vertex_fill, STROKE_BASE)
    };

    let mut scope = surface.scoped();
    scope.translate(center.0);
    scope.paint_rect(
        Bounds::from_center_size(Vec2::ZERO, Vec2::splat(size)),
        Some(fill),
        Some(Stroke::new(theme.vertex_stroke, stroke_width)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use floorplan::{LevelId, LinkId, LinkKind, WorldPoint, WorldSize};

    fn link_with_id(id: u128) -> VerticalLink {
        let mut link = VerticalLink::new(
            LinkKind::Stairs,
            LevelId::from_u128(10),
            LevelId::from_u128(11),
            WorldPoint::new(100.0, 200.0),
            WorldSize::new(40.0, 60.0),
        );
        link.id = LinkId::from_u128(id);
        link
    }

    fn vertex_ops(surface: &RecordingSurface) -> Vec<(Vec2, f32, Option<palette::Hsla>)> {
        surface
            .ops()
            .iter()
            .map(|op| (op.bounds().center(), op.bounds().width(), op.fill()))
            .collect()
    }

    #[test]
    fn test_four_markers_in_corner_order() {
        let link = link_with_id(1);
        let viewport = Viewport::new();
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();

        paint_link_vertices(&link, &viewport, None, &Selection::new(), &theme, &mut surface);

        let ops = vertex_ops(&surface);
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0].0, Vec2::new(100.0, 200.0)); // top-left
        assert_eq!(ops[1].0, Vec2::new(140.0, 200.0)); // top-right
        assert_eq!(ops[2].0, Vec2::new(140.0, 260.0)); // bottom-right
        assert_eq!(ops[3].0, Vec2::new(100.0, 260.0)); // bottom-left
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_all_default_without_hover_or_selection() {
        let link = link_with_id(1);
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();

        paint_link_vertices(
            &link,
            &Viewport::new(),
            None,
            &Selection::new(),
            &theme,
            &mut surface,
        );

        for (_, width, fill) in vertex_ops(&surface) {
            assert_eq!(width, VERTEX_SIZE);
            assert_eq!(fill, Some(theme.vertex_fill));
        }
    }

    #[test]
    fn test_only_hovered_corner_gets_hover_styling() {
        let link = link_with_id(1);
        let theme = Theme::default();
        let hovered = Some(Target::LinkVertex {
            link: link.id,
            vertex: 2,
        });
        let mut surface = RecordingSurface::new();

        paint_link_vertices(
            &link,
            &Viewport::new(),
            hovered,
            &Selection::new(),
            &theme,
            &mut surface,
        );

        let ops = vertex_ops(&surface);
        for (index, (_, width, fill)) in ops.iter().enumerate() {
            if index == 2 {
                assert_eq!(*fill, Some(theme.hover));
                assert_eq!(*width, VERTEX_SIZE + VERTEX_HOVER_GROWTH);
            } else {
                assert_eq!(*fill, Some(theme.vertex_fill));
                assert_eq!(*width, VERTEX_SIZE);
            }
        }
    }

    #[test]
    fn test_hover_on_other_link_changes_nothing() {
        let link = link_with_id(1);
        let theme = Theme::default();
        let hovered = Some(Target::LinkVertex {
            link: LinkId::from_u128(2),
            vertex: 2,
        });
        let mut surface = RecordingSurface::new();

        paint_link_vertices(
            &link,
            &Viewport::new(),
            hovered,
            &Selection::new(),
            &theme,
            &mut surface,
        );

        for (_, _, fill) in vertex_ops(&surface) {
            assert_eq!(fill, Some(theme.vertex_fill));
        }
    }

    #[test]
    fn test_selection_entries_apply_per_link() {
        let link_a = link_with_id(1);
        let link_b = link_with_id(2);
        let theme = Theme::default();

        let mut selection = Selection::new();
        selection.insert(Target::LinkVertex {
            link: link_a.id,
            vertex: 0,
        });
        selection.insert(Target::LinkVertex {
            link: link_b.id,
            vertex: 1,
        });

        let mut surface = RecordingSurface::new();
        paint_link_vertices(
            &link_a,
            &Viewport::new(),
            None,
            &selection,
            &theme,
            &mut surface,
        );
        let ops_a = vertex_ops(&surface);
        assert_eq!(ops_a[0].2, Some(theme.selection));
        assert_eq!(ops_a[1].2, Some(theme.vertex_fill));
        assert_eq!(ops_a[2].2, Some(theme.vertex_fill));
        assert_eq!(ops_a[3].2, Some(theme.vertex_fill));

        surface.clear();
        paint_link_vertices(
            &link_b,
            &Viewport::new(),
            None,
            &selection,
            &theme,
            &mut surface,
        );
        let ops_b = vertex_ops(&surface);
        assert_eq!(ops_b[0].2, Some(theme.vertex_fill));
        assert_eq!(ops_b[1].2, Some(theme.selection));
        assert_eq!(ops_b[2].2, Some(theme.vertex_fill));
        assert_eq!(ops_b[3].2, Some(theme.vertex_fill));
    }

    #[test]
    fn test_selected_beats_hovered_for_color() {
        let link = link_with_id(1);
        let theme = Theme::default();
        let target = Target::LinkVertex {
            link: link.id,
            vertex: 3,
        };
        let mut selection = Selection::new();
        selection.insert(target);
        let mut surface = RecordingSurface::new();

        paint_link_vertices(
            &link,
            &Viewport::new(),
            Some(target),
            &selection,
            &theme,
            &mut surface,
        );

        let ops = vertex_ops(&surface);
        assert_eq!(ops[3].2, Some(theme.selection));
        // Still grows while hovered.
        assert_eq!(ops[3].1, VERTEX_SIZE + VERTEX_HOVER_GROWTH);
    }

    #[test]
    fn test_zoom_moves_markers_without_resizing_them() {
        let link = link_with_id(1);
        let theme = Theme::default();

        let mut at_1x = RecordingSurface::new();
        paint_link_vertices(
            &link,
            &Viewport::new(),
            None,
            &Selection::new(),
            &theme,
            &mut at_1x,
        );

        let zoomed = Viewport {
            offset: Vec2::ZERO,
            zoom: 2.0,
        };
        let mut at_2x = RecordingSurface::new();
        paint_link_vertices(&link, &zoomed, None, &Selection::new(), &theme, &mut at_2x);

        for (a, b) in vertex_ops(&at_1x).iter().zip(vertex_ops(&at_2x).iter()) {
            assert_eq!(b.0, a.0 * 2.0); // positions scale with zoom
            assert_eq!(b.1, a.1); // marker size does not
        }
    }

    #[test]
    fn test_compact_size_class_when_zoomed_out() {
        assert_eq!(vertex_size(1.0, false), VERTEX_SIZE);
        assert_eq!(vertex_size(0.25, false), VERTEX_SIZE_COMPACT);
        assert_eq!(vertex_size(0.25, true), VERTEX_SIZE_COMPACT + VERTEX_HOVER_GROWTH);
    }

    #[test]
    fn test_paint_plan_draws_rooms_links_then_vertices() {
        use floorplan::{FloorPlan, Level, Room};

        let mut plan = FloorPlan::new("Musée");
        let ground = plan.add_level(Level::new("Rez-de-chaussée", 0));
        let first = plan.add_level(Level::new("Premier étage", 1));
        plan.add_room(Room::new(
            ground,
            "Hall",
            WorldPoint::new(0.0, 0.0),
            WorldSize::new(300.0, 200.0),
        ));
        plan.add_link(VerticalLink::new(
            LinkKind::Elevator,
            ground,
            first,
            WorldPoint::new(250.0, 20.0),
            WorldSize::new(30.0, 30.0),
        ));

        let canvas = crate::PlanCanvas::new(plan, ground, Theme::default());
        let mut surface = RecordingSurface::new();
        paint_plan(&canvas.render_state(), &mut surface);

        // 1 room + 1 link footprint + 4 vertices.
        assert_eq!(surface.ops().len(), 6);
        assert_eq!(surface.depth(), 0);
    }
}
