//! Transient user notifications ("toasts").

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered toast stack. Ids increase monotonically for the queue's lifetime.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message)
    }

    /// Removes the toast with `id`. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Id the next pushed toast will get. Snapshot it before an operation
    /// and pass it to [`ToastQueue::ids_since`] to find what the operation raised.
    pub fn watermark(&self) -> u64 {
        self.next_id
    }

    /// Ids of live toasts pushed at or after `watermark`, oldest first.
    pub fn ids_since(&self, watermark: u64) -> Vec<u64> {
        self.toasts
            .iter()
            .map(|t| t.id)
            .filter(|&id| id >= watermark)
            .collect()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_stay_unique_after_dismissal() {
        let mut q = ToastQueue::new();
        let a = q.info("a");
        let b = q.success("b");
        q.dismiss(a);
        let c = q.error("c");

        assert_ne!(b, c);
        assert_ne!(a, c);
        let ids: Vec<u64> = q.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, [b, c]);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut q = ToastQueue::new();
        let a = q.info("a");
        q.dismiss(a);
        q.dismiss(a);
        assert!(q.is_empty());
    }

    #[test]
    fn ids_since_on_an_empty_queue() {
        let mut q = ToastQueue::new();
        let mark = q.watermark();
        let a = q.info("a");
        assert_eq!(q.ids_since(mark), [a]);
    }

    #[test]
    fn ids_since_ignores_a_dismissed_predecessor() {
        let mut q = ToastQueue::new();
        let old = q.info("old");
        let last = q.success("last");
        q.dismiss(last);

        let mark = q.watermark();
        let fresh = q.error("fresh");
        assert_eq!(q.ids_since(mark), [fresh]);
        assert!(q.toasts().iter().any(|t| t.id == old));
    }

    #[test]
    fn ids_since_collects_every_toast_of_one_operation() {
        let mut q = ToastQueue::new();
        q.info("before");
        let mark = q.watermark();
        let a = q.success("a");
        let b = q.error("b");
        assert_eq!(q.ids_since(mark), [a, b]);
    }

    #[test]
    fn ids_since_skips_toasts_dismissed_within_the_operation() {
        let mut q = ToastQueue::new();
        let mark = q.watermark();
        let a = q.info("a");
        let b = q.info("b");
        q.dismiss(a);
        assert_eq!(q.ids_since(mark), [b]);
    }
}
