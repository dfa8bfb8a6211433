mod measurement;
mod session;
mod word;

pub use measurement::{MeasurementScheduler, MeasurementTicket};
pub use session::Session;
pub use word::{ClickOutcome, WordState};
