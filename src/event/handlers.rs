use crate::event::{EventHandler, SessionEvent};

/// Writes every session event to the `log` facade
#[derive(Debug, Default)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::LettersPlaced { count, reshuffle } => {
                log::info!("Placed {} letters (reshuffle: {})", count, reshuffle);
            }
            SessionEvent::LettersCleared => log::info!("Letters cleared"),
            SessionEvent::LetterAdded { id, letter, word } => {
                log::debug!("Added '{}' ({}), word is now {:?}", letter, id, word);
            }
            SessionEvent::Rewound { id, discarded, word } => {
                log::debug!("Rewound to {} dropping {} letters, word is now {:?}", id, discarded, word);
            }
            SessionEvent::ClickIgnored { id } => {
                log::warn!("Ignoring click on unknown letter {}", id);
            }
            SessionEvent::LayoutMeasured { generation, known, total } => {
                log::debug!("Layout #{} measured: {}/{} letters positioned", generation, known, total);
            }
            SessionEvent::MeasurementDiscarded { generation } => {
                log::debug!("Discarding stale layout measurement #{}", generation);
            }
        }
    }
}
