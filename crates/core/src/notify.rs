//! Notification sink for user-facing messages.
//!
//! The cart reports additions through [`Notifier`]; it does not know or care
//! how the message reaches the visitor.

use serde::{Deserialize, Serialize};

/// A transient message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Capability to display a title + description message.
pub trait Notifier {
    fn display(&mut self, title: &str, description: &str);
}

/// Collects toasts in order, for rendering later.
impl Notifier for Vec<Toast> {
    fn display(&mut self, title: &str, description: &str) {
        self.push(Toast::new(title, description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects_toasts_in_order() {
        let mut queue: Vec<Toast> = Vec::new();
        queue.display("first", "a");
        queue.display("second", "b");

        assert_eq!(
            queue,
            vec![Toast::new("first", "a"), Toast::new("second", "b")]
        );
    }
}
