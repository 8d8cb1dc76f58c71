//! Scheduling-link modal state
//!
//! The "hire me" button opens a modal embedding the owner's scheduling page.
//! Its visibility is a plain flag, independent of the active-section tracker.

/// Input events that can close the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Escape key pressed
    Escape,
    /// Pointer pressed outside the dialog
    OutsideClick,
    /// Pointer pressed inside the dialog
    InsideClick,
    /// Close button pressed
    CloseButton,
}

impl ModalEvent {
    pub const ALL: [ModalEvent; 4] = [
        ModalEvent::Escape,
        ModalEvent::OutsideClick,
        ModalEvent::InsideClick,
        ModalEvent::CloseButton,
    ];

    /// Whether this event dismisses an open modal
    pub fn closes(self) -> bool {
        !matches!(self, ModalEvent::InsideClick)
    }

    /// Event name used in the generated markup
    pub fn name(self) -> &'static str {
        match self {
            ModalEvent::Escape => "escape",
            ModalEvent::OutsideClick => "outside-click",
            ModalEvent::InsideClick => "inside-click",
            ModalEvent::CloseButton => "close-button",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchedulingModal {
    url: String,
    open: bool,
}

impl SchedulingModal {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked while the modal is open
    pub fn locks_body_scroll(&self) -> bool {
        self.open
    }

    /// Apply an input event; returns whether the modal is still open
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        if event.closes() {
            self.close();
        }
        self.open
    }

    /// Scheduling URL with the embed parameters appended
    pub fn embed_url(&self) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}hide_gdpr_banner=1&hide_event_type_details=1",
            self.url, separator
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
