// src/renderer.rs
use eframe::egui::{self, Pos2, Rect, Sense, Stroke, Vec2};

use crate::geometry::{LOGICAL_CENTER, LOGICAL_SIZE, MARKER_RADIUS, MarkerKind, MeasuredLayout, PathGeometry, WHEEL_RADIUS};
use crate::state::Session;
use crate::theme::ThemeColors;
use crate::token::TokenId;
use crate::widgets::LetterButton;

/// Letter diameter, in logical units
pub const LETTER_SIZE: f32 = 48.0;
pub const LINE_WIDTH: f32 = 4.0;
/// The wheel never shrinks below this many pixels
pub const MIN_WHEEL_SIZE: f32 = 200.0;

/// What happened while drawing the wheel this frame
#[derive(Debug, Default)]
pub struct WheelOutput {
    pub clicked: Option<TokenId>,
    /// Rectangles of the container and every letter as laid out this frame
    pub layout: MeasuredLayout,
}

#[derive(Debug)]
pub struct Renderer {
    theme: ThemeColors,
}

impl Renderer {
    pub fn new(theme: ThemeColors) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &ThemeColors {
        &self.theme
    }

    /// Maps a point of the logical square onto `container`
    pub fn to_screen(container: Rect, point: Pos2) -> Pos2 {
        let scale = container.size() / LOGICAL_SIZE;
        container.min + Vec2::new(point.x * scale.x, point.y * scale.y)
    }

    /// Pixel center of a letter at `angle` degrees
    pub fn letter_center(container: Rect, angle: f32) -> Pos2 {
        let radians = angle.to_radians();
        let logical = LOGICAL_CENTER + Vec2::new(radians.cos(), radians.sin()) * WHEEL_RADIUS;
        Self::to_screen(container, logical)
    }

    /// Draws the wheel, the path and the letters.
    ///
    /// Args:
    ///     ui (egui::Ui): The UI to allocate the wheel in
    ///     session (Session): The session supplying letters and path
    ///
    /// Returns:
    ///     WheelOutput: The clicked letter, if any, and the measured layout
    pub fn render_wheel(&self, ui: &mut egui::Ui, session: &Session) -> WheelOutput {
        let available = ui.available_size();
        let side = available.x.min(available.y).max(MIN_WHEEL_SIZE);
        let (container, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
        let scale = side / LOGICAL_SIZE;

        let painter = ui.painter();
        painter.circle_filled(
            container.center(),
            (WHEEL_RADIUS + LETTER_SIZE) * scale,
            ui.visuals().faint_bg_color,
        );

        self.paint_path(ui, container, session.geometry());

        let mut output = WheelOutput {
            clicked: None,
            layout: MeasuredLayout::new(container),
        };

        for token in session.tokens() {
            let rect = Rect::from_center_size(
                Self::letter_center(container, token.angle()),
                Vec2::splat(LETTER_SIZE * scale),
            );
            let button = LetterButton::new(token, session.is_used(token.id()), self.theme.button_background);
            let response = button.show(ui, rect);
            if response.clicked() {
                output.clicked = Some(token.id());
            }
            output.layout.record(token.id(), response.rect);
        }

        output
    }

    fn paint_path(&self, ui: &egui::Ui, container: Rect, geometry: &PathGeometry) {
        let scale = container.width() / LOGICAL_SIZE;
        let stroke = Stroke::new(LINE_WIDTH * scale, self.theme.line);
        let painter = ui.painter();

        for segment in &geometry.segments {
            painter.line_segment(
                [Self::to_screen(container, segment.start), Self::to_screen(container, segment.end)],
                stroke,
            );
        }

        let radius = MARKER_RADIUS * scale;
        for marker in &geometry.markers {
            let center = Self::to_screen(container, marker.center);
            match marker.kind {
                MarkerKind::Start => {
                    painter.circle_filled(center, radius, self.theme.line);
                }
                MarkerKind::End => {
                    painter.circle_filled(center, radius, self.theme.button_background);
                    painter.circle_stroke(center, radius, stroke);
                }
                MarkerKind::Waypoint => {
                    painter.circle_stroke(center, radius, stroke);
                }
            }
        }
    }
}
