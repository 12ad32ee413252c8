use crate::core::{Rect, Vec2};

use super::types::{Face, Motion, Wall};

/// Box the widget center can occupy once [`resolve_bounds`] has run.
///
/// Unknown axes (extent not positive) are unbounded; an axis too small for
/// the widget collapses to its midpoint.
pub fn reachable_box(viewport: Vec2, margin: f64) -> Rect {
    let (left, right) = reachable_span(viewport.x, margin);
    let (top, bottom) = reachable_span(viewport.y, margin);
    Rect::new(left, top, right, bottom)
}

fn reachable_span(extent: f64, margin: f64) -> (f64, f64) {
    if extent.is_nan() || extent <= 0.0 {
        (f64::NEG_INFINITY, f64::INFINITY)
    } else if extent < 2.0 * (margin + 1.0) {
        (extent / 2.0, extent / 2.0)
    } else {
        (margin + 1.0, extent - margin - 1.0)
    }
}

/// Keep the widget inside the viewport.
///
/// Each axis is checked on every call, so a widget resting on an edge under
/// gravity is re-clamped each frame instead of sinking through it.
/// An axis whose extent is not known yet (<= 0) is left alone; an axis too
/// small to hold the widget centers it and kills that velocity component.
pub fn resolve_bounds(
    motion: &mut Motion,
    viewport: Vec2,
    margin: f64,
    restitution: f64,
    mut on_bounce: impl FnMut(Wall),
) {
    let (pos, vel) = (&mut motion.position, &mut motion.velocity);

    if let Some(high) = clamp_axis(&mut pos.x, &mut vel.x, viewport.x, margin, restitution) {
        on_bounce(if high { Wall::Right } else { Wall::Left });
    }
    if let Some(high) = clamp_axis(&mut pos.y, &mut vel.y, viewport.y, margin, restitution) {
        on_bounce(if high { Wall::Bottom } else { Wall::Top });
    }
}

/// Returns `Some(true)` for the high edge, `Some(false)` for the low one
#[inline]
fn clamp_axis(p: &mut f64, v: &mut f64, extent: f64, margin: f64, restitution: f64) -> Option<bool> {
    if extent.is_nan() || extent <= 0.0 {
        return None;
    }
    if extent < 2.0 * (margin + 1.0) {
        *p = extent / 2.0;
        *v = 0.0;
        return None;
    }

    let mut hit = None;
    if *p <= margin {
        *p = margin + 1.0;
        *v = v.abs() * restitution;
        hit = Some(false);
    }
    if *p >= extent - margin {
        *p = extent - margin - 1.0;
        *v = -v.abs() * restitution;
        hit = Some(true);
    }
    hit
}

/// Where the widget center lands when pushed out through `face`
fn push_out_target(obstacle: &Rect, face: Face, margin: f64) -> f64 {
    match face {
        Face::Left => obstacle.left - margin - 1.0,
        Face::Right => obstacle.right + margin + 1.0,
        Face::Top => obstacle.top - margin - 1.0,
        Face::Bottom => obstacle.bottom + margin + 1.0,
    }
}

fn target_fits(reach: &Rect, face: Face, at: f64) -> bool {
    match face {
        Face::Left | Face::Right => at >= reach.left && at <= reach.right,
        Face::Top | Face::Bottom => at >= reach.top && at <= reach.bottom,
    }
}

/// Push the widget out of one obstacle along the face it penetrates least.
///
/// Faces whose push-out would leave `reach` are skipped; if every face does,
/// the shallowest one is used and the caller re-applies the viewport bounds.
/// Ties go Left, Right, Top, Bottom.
pub fn resolve_obstacle(
    motion: &mut Motion,
    obstacle: &Rect,
    reach: &Rect,
    margin: f64,
    restitution: f64,
) -> Option<Face> {
    if !obstacle.has_area() || !obstacle.is_finite() {
        return None;
    }
    let bounds = Rect::around(motion.position, margin);
    if !bounds.overlaps(obstacle) {
        return None;
    }

    let depths = [
        (Face::Left, bounds.right - obstacle.left),
        (Face::Right, obstacle.right - bounds.left),
        (Face::Top, bounds.bottom - obstacle.top),
        (Face::Bottom, obstacle.bottom - bounds.top),
    ];
    let shallowest = |fits: &dyn Fn(Face) -> bool| {
        depths
            .iter()
            .filter(|(face, _)| fits(*face))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(face, _)| *face)
    };
    let face = shallowest(&|face: Face| target_fits(reach, face, push_out_target(obstacle, face, margin)))
        .or_else(|| shallowest(&|_: Face| true))?;

    let at = push_out_target(obstacle, face, margin);
    let (pos, vel) = (&mut motion.position, &mut motion.velocity);
    match face {
        Face::Left => {
            pos.x = at;
            vel.x = -vel.x.abs() * restitution;
        }
        Face::Right => {
            pos.x = at;
            vel.x = vel.x.abs() * restitution;
        }
        Face::Top => {
            pos.y = at;
            vel.y = -vel.y.abs() * restitution;
        }
        Face::Bottom => {
            pos.y = at;
            vel.y = vel.y.abs() * restitution;
        }
    }
    Some(face)
}

/// Resolve against every obstacle in order, each against the position the
/// previous one left. Returns the number of contacts.
pub fn resolve_obstacles(
    motion: &mut Motion,
    obstacles: &[Rect],
    reach: &Rect,
    margin: f64,
    restitution: f64,
    mut on_contact: impl FnMut(Face),
) -> usize {
    let mut contacts = 0;
    for obstacle in obstacles {
        if let Some(face) = resolve_obstacle(motion, obstacle, reach, margin, restitution) {
            contacts += 1;
            on_contact(face);
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGIN: f64 = 24.0;
    const BOUNCE: f64 = 0.68;

    fn moving(x: f64, y: f64, vx: f64, vy: f64) -> Motion {
        let mut m = Motion::at(Vec2::new(x, y));
        m.velocity = Vec2::new(vx, vy);
        m
    }

    #[test]
    fn floor_reflects_and_damps() {
        let mut m = moving(500.0, 790.0, 0.0, 12.0);
        let mut walls = Vec::new();
        resolve_bounds(&mut m, Vec2::new(1000.0, 800.0), MARGIN, BOUNCE, |w| walls.push(w));

        assert_eq!(walls, vec![Wall::Bottom]);
        assert_eq!(m.position.y, 800.0 - MARGIN - 1.0);
        assert!((m.velocity.y + 12.0 * BOUNCE).abs() < 1e-12);
    }

    #[test]
    fn left_wall_pushes_right_even_when_already_moving_right() {
        let mut m = moving(10.0, 300.0, 2.0, 0.0);
        resolve_bounds(&mut m, Vec2::new(1000.0, 800.0), MARGIN, BOUNCE, |_| {});
        assert_eq!(m.position.x, MARGIN + 1.0);
        assert!((m.velocity.x - 2.0 * BOUNCE).abs() < 1e-12);
    }

    #[test]
    fn unknown_viewport_axis_is_ignored() {
        let mut m = moving(-50.0, -50.0, -1.0, -1.0);
        resolve_bounds(&mut m, Vec2::zero(), MARGIN, BOUNCE, |_| panic!("no wall"));
        assert_eq!(m.position, Vec2::new(-50.0, -50.0));
    }

    #[test]
    fn tiny_viewport_centers_the_widget() {
        let mut m = moving(3.0, 400.0, 5.0, 0.0);
        resolve_bounds(&mut m, Vec2::new(30.0, 800.0), MARGIN, BOUNCE, |_| {});
        assert_eq!(m.position.x, 15.0);
        assert_eq!(m.velocity.x, 0.0);
    }

    fn open_view() -> Rect {
        reachable_box(Vec2::new(1000.0, 800.0), MARGIN)
    }

    #[test]
    fn reachable_box_matches_the_clamp() {
        assert_eq!(open_view(), Rect::new(25.0, 25.0, 975.0, 775.0));

        let unknown = reachable_box(Vec2::new(0.0, f64::NAN), MARGIN);
        assert_eq!(unknown.left, f64::NEG_INFINITY);
        assert_eq!(unknown.bottom, f64::INFINITY);

        let tiny = reachable_box(Vec2::new(30.0, 800.0), MARGIN);
        assert_eq!((tiny.left, tiny.right), (15.0, 15.0));
    }

    #[test]
    fn obstacle_resolves_along_shallowest_face() {
        // Widget box 76..124 x 76..124 dips 4px into the top of the obstacle
        let obstacle = Rect::new(0.0, 120.0, 400.0, 300.0);
        let mut m = moving(100.0, 100.0, 3.0, 5.0);

        let face = resolve_obstacle(&mut m, &obstacle, &open_view(), MARGIN, BOUNCE);

        assert_eq!(face, Some(Face::Top));
        assert_eq!(m.position.y, 120.0 - MARGIN - 1.0);
        assert!((m.velocity.y + 5.0 * BOUNCE).abs() < 1e-12);
        assert_eq!(m.velocity.x, 3.0);
    }

    #[test]
    fn obstacle_side_hit_reflects_horizontal_velocity() {
        let obstacle = Rect::new(200.0, 0.0, 300.0, 400.0);
        let mut m = moving(290.0 + MARGIN, 200.0, -6.0, 1.0);

        assert_eq!(resolve_obstacle(&mut m, &obstacle, &open_view(), MARGIN, BOUNCE), Some(Face::Right));
        assert_eq!(m.position.x, 300.0 + MARGIN + 1.0);
        assert!((m.velocity.x - 6.0 * BOUNCE).abs() < 1e-12);
    }

    #[test]
    fn empty_and_distant_obstacles_are_skipped() {
        let mut m = moving(100.0, 100.0, 1.0, 1.0);
        let obstacles = [
            Rect::new(90.0, 90.0, 90.0, 200.0),
            Rect::new(500.0, 500.0, 600.0, 600.0),
        ];
        assert_eq!(resolve_obstacles(&mut m, &obstacles, &open_view(), MARGIN, BOUNCE, |_| {}), 0);
        assert_eq!(m.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn overlapping_obstacles_resolve_sequentially() {
        // First push lands the widget inside the second obstacle
        let first = Rect::new(110.0, 0.0, 400.0, 400.0);
        let second = Rect::new(0.0, 0.0, 90.0, 400.0);
        let mut m = moving(100.0, 200.0, 0.0, 0.0);

        let mut faces = Vec::new();
        let contacts = resolve_obstacles(&mut m, &[first, second], &open_view(), MARGIN, BOUNCE, |f| faces.push(f));

        assert_eq!(contacts, 2);
        assert_eq!(faces, vec![Face::Left, Face::Right]);
        assert_eq!(m.position.x, 90.0 + MARGIN + 1.0);
    }

    #[test]
    fn push_out_never_leaves_the_viewport() {
        // Top face is shallowest but would put the center at y = -5
        let banner = Rect::new(100.0, 20.0, 200.0, 60.0);
        let mut m = moving(150.0, 30.0, 0.0, -4.0);

        assert_eq!(resolve_obstacle(&mut m, &banner, &open_view(), MARGIN, BOUNCE), Some(Face::Bottom));
        assert_eq!(m.position.y, 60.0 + MARGIN + 1.0);
        assert!((m.velocity.y - 4.0 * BOUNCE).abs() < 1e-12);
        assert!(open_view().contains(m.position));
    }

    #[test]
    fn faces_leading_off_screen_are_skipped() {
        let wall = Rect::new(-100.0, 300.0, 1100.0, 320.0);
        let tight = Rect::new(25.0, 25.0, 975.0, 775.0);
        let mut m = moving(500.0, 310.0, 0.0, 0.0);

        // Left/right targets are off screen, so a vertical face wins
        assert_eq!(resolve_obstacle(&mut m, &wall, &tight, MARGIN, BOUNCE), Some(Face::Top));
        assert_eq!(m.position.y, 300.0 - MARGIN - 1.0);
    }

    #[test]
    fn obstacle_covering_the_viewport_uses_the_shallowest_face() {
        let cover = Rect::new(-100.0, -100.0, 1100.0, 900.0);
        let mut m = moving(500.0, 400.0, 0.0, 0.0);

        assert_eq!(resolve_obstacle(&mut m, &cover, &open_view(), MARGIN, BOUNCE), Some(Face::Top));
        assert_eq!(m.position.y, -125.0);

        resolve_bounds(&mut m, Vec2::new(1000.0, 800.0), MARGIN, BOUNCE, |_| {});
        assert!(open_view().contains(m.position));
    }
}
