mod input_panel;
mod wheel_panel;

pub use input_panel::{INPUT_HINT, input_panel};
pub use wheel_panel::wheel_panel;
