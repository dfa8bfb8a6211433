use crate::placement::filter_letters;
use crate::state::Session;
use crate::theme::ThemeColors;

pub const INPUT_HINT: &str = "Enter letters here...";

/// Text field and shuffle button along the top of the window
pub fn input_panel(ctx: &egui::Context, input_buffer: &mut String, session: &mut Session, theme: &ThemeColors) {
    egui::TopBottomPanel::top("input_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(input_buffer)
                    .hint_text(INPUT_HINT)
                    .desired_width(240.0),
            );
            if response.changed() {
                // Keep the field showing only what was accepted
                *input_buffer = filter_letters(input_buffer);
                session.set_input(input_buffer);
                ctx.request_repaint();
            }

            let shuffle = egui::Button::new("Shuffle").fill(theme.button_background);
            if ui.add_enabled(session.can_shuffle(), shuffle).clicked() {
                log::info!("Shuffle requested");
                session.shuffle();
                ctx.request_repaint();
            }
        });
        ui.add_space(6.0);
    });
}
