//! Action dispatch hooks
//!
//! Rendering is pure; clipboard writes and dialog opens belong to the
//! embedding application. It implements [`ReviewHooks`] and feeds
//! [`FieldAction`]s through [`FieldAction::dispatch`] when the user
//! triggers them.

use crate::view::FieldAction;

/// Stock confirmation for copy actions that carry no message
pub const DEFAULT_COPY_MESSAGE: &str = "Copied!";

/// Side-effect callbacks for dispatched field actions
pub trait ReviewHooks {
    /// A copy action fired: put `text` on the clipboard and confirm
    /// with `message`
    fn on_copy(&self, text: &str, message: &str);

    /// An expand action fired: show `html` in a larger view titled
    /// `title`
    fn on_expand(&self, title: &str, html: &str);
}

/// Hooks that do nothing, for headless rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl ReviewHooks for NoopHooks {
    fn on_copy(&self, _text: &str, _message: &str) {}

    fn on_expand(&self, _title: &str, _html: &str) {}
}

impl FieldAction {
    /// Run this action's side effect through the given hooks
    ///
    /// Copy actions without a message get [`DEFAULT_COPY_MESSAGE`].
    pub fn dispatch(&self, hooks: &dyn ReviewHooks) {
        match self {
            Self::Copy { text, message } => {
                hooks.on_copy(text, message.as_deref().unwrap_or(DEFAULT_COPY_MESSAGE));
            }
            Self::Expand { title, html } => hooks.on_expand(title, html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        copies: RefCell<Vec<(String, String)>>,
        expands: RefCell<Vec<(String, String)>>,
    }

    impl ReviewHooks for Recorder {
        fn on_copy(&self, text: &str, message: &str) {
            self.copies
                .borrow_mut()
                .push((text.to_string(), message.to_string()));
        }

        fn on_expand(&self, title: &str, html: &str) {
            self.expands
                .borrow_mut()
                .push((title.to_string(), html.to_string()));
        }
    }

    #[test]
    fn copy_without_message_uses_the_stock_one() {
        let hooks = Recorder::default();
        FieldAction::Copy {
            text: "payload".into(),
            message: None,
        }
        .dispatch(&hooks);
        assert_eq!(
            hooks.copies.borrow().as_slice(),
            &[("payload".to_string(), "Copied!".to_string())]
        );
    }

    #[test]
    fn copy_with_message_keeps_it() {
        let hooks = Recorder::default();
        FieldAction::Copy {
            text: "<p>x</p>".into(),
            message: Some("HTML copied!".into()),
        }
        .dispatch(&hooks);
        assert_eq!(
            hooks.copies.borrow().as_slice(),
            &[("<p>x</p>".to_string(), "HTML copied!".to_string())]
        );
    }

    #[test]
    fn expand_routes_title_and_markup() {
        let hooks = Recorder::default();
        FieldAction::Expand {
            title: "Body".into(),
            html: "<p>x</p>".into(),
        }
        .dispatch(&hooks);
        assert_eq!(
            hooks.expands.borrow().as_slice(),
            &[("Body".to_string(), "<p>x</p>".to_string())]
        );
        assert!(hooks.copies.borrow().is_empty());
    }

    #[test]
    fn noop_hooks_accept_everything() {
        FieldAction::Copy {
            text: String::new(),
            message: None,
        }
        .dispatch(&NoopHooks);
    }
}
