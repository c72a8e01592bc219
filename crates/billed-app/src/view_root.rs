use crate::views;
use std::sync::{Arc, Mutex, MutexGuard};

/// Vertical-layout navigation icons. At most one carries the active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    /// Window icon, highlighted on the bill-list view.
    Window,
    /// Mail icon, highlighted on the creation view.
    Mail,
}

/// State of the attachment preview region.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    /// Attachment URL injected from the clicked row. `None` when the bill
    /// was submitted without a stored attachment.
    pub file_url: Option<String>,
    /// Preview is scaled to this share of the region width.
    pub width_pct: u32,
    pub open: bool,
}

#[derive(Default)]
struct ViewRoot {
    content: String,
    active_icon: Option<NavIcon>,
    modal: Option<ModalState>,
    alert: Option<String>,
    epoch: u64,
}

/// Cloneable handle to the shared render target.
///
/// The root is the single mutable surface containers write into. `epoch`
/// is a mount generation: every successful navigation bumps it, and a
/// write stamped with an older epoch is dropped, so a fetch that resolves
/// after the user navigated away cannot overwrite the mounted view.
#[derive(Clone, Default)]
pub struct ViewHandle {
    root: Arc<Mutex<ViewRoot>>,
}

impl ViewHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ViewRoot> {
        self.root.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current mount generation.
    pub fn epoch(&self) -> u64 {
        self.lock().epoch
    }

    /// Start a new mount: bump the generation, set the active icon and
    /// close any preview left over from the previous view. Returns the
    /// new generation, which stamps all writes for this mount.
    pub fn begin_mount(&self, icon: Option<NavIcon>) -> u64 {
        let mut root = self.lock();
        root.epoch += 1;
        root.active_icon = icon;
        root.modal = None;
        root.epoch
    }

    /// Replace the root content, unless `epoch` is stale.
    /// Returns whether the write landed.
    pub fn set_content(&self, epoch: u64, content: impl Into<String>) -> bool {
        let mut root = self.lock();
        if root.epoch != epoch {
            return false;
        }
        root.content = content.into();
        true
    }

    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    pub fn active_icon(&self) -> Option<NavIcon> {
        self.lock().active_icon
    }

    pub fn open_modal(&self, modal: ModalState) {
        self.lock().modal = Some(modal);
    }

    pub fn modal(&self) -> Option<ModalState> {
        self.lock().modal.clone()
    }

    /// A blocking user-facing warning (the alert() of the original).
    pub fn raise_alert(&self, message: impl Into<String>) {
        self.lock().alert = Some(message.into());
    }

    /// Consume the pending alert, if any. The shell displays it and the
    /// form flow continues.
    pub fn take_alert(&self) -> Option<String> {
        self.lock().alert.take()
    }

    /// Full displayed state: nav bar, mounted content, open preview.
    pub fn rendered(&self) -> String {
        let root = self.lock();
        let mut out = views::render_nav(root.active_icon);
        out.push_str(&root.content);
        if let Some(modal) = root.modal.as_ref().filter(|m| m.open) {
            out.push_str(&views::render_modal(modal));
        }
        out
    }
}
