use egui::{Align2, Color32, CursorIcon, FontId, Id, Rect, Response, Sense, Stroke, Ui};

use crate::token::LetterToken;

/// A round, clickable letter on the wheel
pub struct LetterButton<'a> {
    token: &'a LetterToken,
    used: bool,
    used_fill: Color32,
}

impl<'a> LetterButton<'a> {
    pub fn new(token: &'a LetterToken, used: bool, used_fill: Color32) -> Self {
        Self {
            token,
            used,
            used_fill,
        }
    }

    /// Draws the letter inside `rect` and returns the click response
    pub fn show(&self, ui: &mut Ui, rect: Rect) -> Response {
        let id = Id::new(("letter", self.token.id()));
        let response = ui
            .interact(rect, id, Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        let visuals = ui.style().interact(&response);
        let (fill, text_color) = if self.used {
            (self.used_fill, Color32::from_gray(20))
        } else {
            (visuals.bg_fill, visuals.text_color())
        };

        let radius = rect.width().min(rect.height()) / 2.0;
        let painter = ui.painter();
        painter.circle_filled(rect.center(), radius, fill);
        painter.circle_stroke(rect.center(), radius, Stroke::new(1.0, visuals.bg_stroke.color));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            self.token.label(),
            FontId::proportional(radius),
            text_color,
        );

        response
    }
}
