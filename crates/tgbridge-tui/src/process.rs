//! Message processing through the TEA update loop

use tgbridge_app::{handler, AppState, Message};

/// Process a message and every follow-up message it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
