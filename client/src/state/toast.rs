//! Transient notification stack shown by the `Toaster` surface.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum toasts on screen; pushing past it drops the oldest.
pub const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast and return its id.
    pub fn push(&mut self, title: impl Into<String>, description: Option<String>, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, title: title.into(), description, variant });
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
