use crate::config::AppConfig;
use crate::event::LoggingHandler;
use crate::panels::{input_panel, wheel_panel};
use crate::renderer::Renderer;
use crate::state::Session;
use crate::theme::ThemeColors;

pub struct LetterWheelApp {
    session: Session,
    renderer: Renderer,
    /// Contents of the text field, mirrors `session.input()`
    input_buffer: String,
}

impl LetterWheelApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> Self {
        let theme = ThemeColors::load(config.theme_path.as_deref());

        let mut session = match config.seed {
            Some(seed) => Session::with_seed(seed),
            None => Session::new(),
        };
        session.event_bus().subscribe(Box::new(LoggingHandler));
        session.set_input(&config.initial_text);

        Self {
            input_buffer: session.input().to_owned(),
            session,
            renderer: Renderer::new(theme),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Draws one frame
    pub fn ui(&mut self, ctx: &egui::Context) {
        // Taken before input is handled, so anything placed this frame supersedes it
        let ticket = self.session.pending_measurement();

        input_panel(ctx, &mut self.input_buffer, &mut self.session, self.renderer.theme());
        wheel_panel(ctx, &mut self.session, &self.renderer, ticket);
    }
}

impl eframe::App for LetterWheelApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
