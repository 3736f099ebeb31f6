//! Message update handlers - thin dispatcher delegating to submodules

mod alert;
mod timer;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_timer(&message) {
            return task;
        }
        if let Some(task) = self.handle_alert(&message) {
            return task;
        }

        Task::none()
    }
}
