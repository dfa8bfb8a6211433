use std::collections::HashMap;

use egui::{Pos2, Rect};

use crate::geometry::LOGICAL_SIZE;
use crate::token::{LetterToken, TokenId};

/// Token centers in the normalized 400×400 space.
pub type PositionMap = HashMap<TokenId, Pos2>;

/// Source of rendered bounding boxes, in pixels.
///
/// Letters are placed by rotation around the wheel, so their real centers have
/// to be read back from whatever drew them.
pub trait LayoutProvider {
    /// The rectangle the wheel is drawn in
    fn container_rect(&self) -> Option<Rect>;

    /// The rectangle of one letter, if it has been laid out
    fn element_rect(&self, id: TokenId) -> Option<Rect>;
}

/// Rectangles recorded while drawing a frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasuredLayout {
    container: Option<Rect>,
    elements: HashMap<TokenId, Rect>,
}

impl MeasuredLayout {
    pub fn new(container: Rect) -> Self {
        Self {
            container: Some(container),
            elements: HashMap::new(),
        }
    }

    pub fn record(&mut self, id: TokenId, rect: Rect) {
        self.elements.insert(id, rect);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl LayoutProvider for MeasuredLayout {
    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn element_rect(&self, id: TokenId) -> Option<Rect> {
        self.elements.get(&id).copied()
    }
}

/// Maps the rendered center of `id` into normalized space.
///
/// Returns `None` when the letter hasn't been laid out or the container has no
/// area yet.
pub fn center_of(id: TokenId, layout: &dyn LayoutProvider) -> Option<Pos2> {
    let container = layout.container_rect()?;
    let element = layout.element_rect(id)?;

    let size = container.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }

    let offset = element.center() - container.min;
    Some(Pos2::new(
        offset.x / size.x * LOGICAL_SIZE,
        offset.y / size.y * LOGICAL_SIZE,
    ))
}

/// Measures every token that `layout` knows about.
pub fn measure_positions(tokens: &[LetterToken], layout: &dyn LayoutProvider) -> PositionMap {
    tokens
        .iter()
        .filter_map(|token| center_of(token.id(), layout).map(|pos| (token.id(), pos)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_center_scales_into_logical_space() {
        let id = TokenId::random();
        let mut layout = MeasuredLayout::new(Rect::from_min_size(Pos2::new(100.0, 50.0), vec2(800.0, 800.0)));
        layout.record(id, Rect::from_center_size(Pos2::new(500.0, 450.0), vec2(40.0, 40.0)));

        assert_eq!(center_of(id, &layout), Some(Pos2::new(200.0, 200.0)));
    }

    #[test]
    fn test_unknown_element_has_no_center() {
        let layout = MeasuredLayout::new(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0)));
        assert_eq!(center_of(TokenId::random(), &layout), None);
    }

    #[test]
    fn test_empty_container_has_no_center() {
        let id = TokenId::random();
        let mut layout = MeasuredLayout::new(Rect::from_min_size(Pos2::ZERO, vec2(0.0, 0.0)));
        layout.record(id, Rect::from_min_size(Pos2::ZERO, vec2(10.0, 10.0)));
        assert_eq!(center_of(id, &layout), None);

        let unmounted = MeasuredLayout::default();
        assert_eq!(center_of(id, &unmounted), None);
    }
}
