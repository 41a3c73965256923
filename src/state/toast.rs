#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Transient, user-dismissable notification stack.
///
/// Network and validation failures surface here; nothing in the client is
/// fatal, so every error path ends in a toast, a dialog, or a redirect.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(Toast {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
