use egui::Pos2;

use crate::geometry::{CENTER_OFFSET, LOGICAL_CENTER, MARKER_RADIUS, PositionMap};
use crate::token::TokenId;

/// How a clicked letter's marker is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// First clicked letter, filled
    Start,
    /// Last clicked letter once every letter is used
    End,
    /// Any other clicked letter, outline only
    Waypoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: TokenId,
    pub center: Pos2,
    pub kind: MarkerKind,
}

/// A line between two consecutively clicked letters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: TokenId,
    pub to: TokenId,
    pub start: Pos2,
    pub end: Pos2,
}

/// Everything needed to draw the current path, in normalized space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathGeometry {
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
}

impl PathGeometry {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.markers.is_empty()
    }
}

/// Pulls `point` toward `center` by `offset` units.
///
/// A point sitting on the center stays put; a point closer than `offset`
/// lands on the center.
pub fn trim_toward_center(point: Pos2, center: Pos2, offset: f32) -> Pos2 {
    let delta = point - center;
    let length = delta.length();
    if length == 0.0 {
        return point;
    }
    let remaining = (length - offset).max(0.0);
    center + delta * (remaining / length)
}

/// The point `radius` units from `from` in the direction of `to`.
pub fn edge_point(from: Pos2, to: Pos2, radius: f32) -> Pos2 {
    let delta = to - from;
    let length = delta.length();
    if length == 0.0 {
        return from;
    }
    from + delta * (radius / length)
}

fn trimmed(positions: &PositionMap, id: TokenId) -> Option<Pos2> {
    positions
        .get(&id)
        .map(|pos| trim_toward_center(*pos, LOGICAL_CENTER, CENTER_OFFSET))
}

/// Builds the segments and markers for `click_order`.
///
/// Letters without a known position are skipped along with every segment
/// touching them.
pub fn resolve_path(click_order: &[TokenId], token_count: usize, positions: &PositionMap) -> PathGeometry {
    let complete = token_count > 0 && click_order.len() == token_count;
    let last_index = click_order.len().saturating_sub(1);

    let segments = click_order
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let a = trimmed(positions, from)?;
            let b = trimmed(positions, to)?;
            Some(Segment {
                from,
                to,
                start: edge_point(a, b, MARKER_RADIUS),
                end: edge_point(b, a, MARKER_RADIUS),
            })
        })
        .collect();

    let markers = click_order
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let center = trimmed(positions, *id)?;
            let kind = if index == 0 {
                MarkerKind::Start
            } else if complete && index == last_index {
                MarkerKind::End
            } else {
                MarkerKind::Waypoint
            };
            Some(Marker { id: *id, center, kind })
        })
        .collect();

    PathGeometry { segments, markers }
}
