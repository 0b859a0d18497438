//! Key event handlers for the dashboard

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Force quit works regardless of what else is on screen
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        InputKey::Char('j') | InputKey::Down | InputKey::Tab => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up | InputKey::BackTab => Some(Message::SelectPrevious),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),

        InputKey::Char(' ' | 't') | InputKey::Enter => {
            state.selected_channel().map(|_| Message::ToggleSelected)
        }

        // 1-9 toggle by position
        InputKey::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            (index < state.channels.len()).then_some(Message::ToggleChannelAt(index))
        }

        InputKey::Char('m') => Some(Message::LoadMoreNotifications),
        InputKey::Char('x') if state.toast.is_some() => Some(Message::DismissToast),

        _ => None,
    }
}
