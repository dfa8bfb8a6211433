use crate::geometry::LayoutProvider;
use crate::renderer::Renderer;
use crate::state::{MeasurementTicket, Session};

/// The wheel, its path and the word built so far.
///
/// `ticket` is the measurement that was pending when the frame started. It is
/// applied once the letters have been laid out; if the session scheduled a
/// newer one in the meantime it gets discarded and another frame is requested.
pub fn wheel_panel(
    ctx: &egui::Context,
    session: &mut Session,
    renderer: &Renderer,
    ticket: Option<MeasurementTicket>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let output = ui
            .vertical_centered(|ui| {
                let output = renderer.render_wheel(ui, session);
                ui.add_space(8.0);
                ui.heading(session.built_word().to_uppercase());
                output
            })
            .inner;

        if let Some(ticket) = ticket {
            session.apply_measurement(ticket, &output.layout);
        }

        // The window was resized since the last measurement
        let container = output.layout.container_rect();
        if !session.tokens().is_empty()
            && session.pending_measurement().is_none()
            && session.measured_container() != container
        {
            session.request_measurement();
        }

        if let Some(id) = output.clicked {
            session.click(id);
            ctx.request_repaint();
        }

        if session.pending_measurement().is_some() {
            ctx.request_repaint();
        }
    });
}
