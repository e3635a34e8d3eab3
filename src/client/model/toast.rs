/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

/// Transient notification shown after a create, update or delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub variant: ToastVariant,
    pub title: String,
    pub body: String,
}

/// Queue of visible toasts, provided as context by the app root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub items: Vec<Toast>,
}

impl ToastQueue {
    /// Pushes a toast and returns its id so the caller can dismiss it later.
    pub fn push(
        &mut self,
        variant: ToastVariant,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id,
            variant,
            title: title.into(),
            body: body.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastVariant::Success, "Success", "Role created");
        let second = queue.push(ToastVariant::Error, "Error", "Role update failed");

        queue.dismiss(first);

        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, second);
        assert_eq!(queue.items[0].variant, ToastVariant::Error);
    }
}
