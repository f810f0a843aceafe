use prodshot_core::busy::BusyTicker;

/// Overall UI state that doesn't belong in the session.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Blocking notice (rejected upload); shown until dismissed.
    pub notice: Option<String>,

    /// True while files are dragged over the window.
    pub drop_hover: bool,

    pub show_about: bool,

    /// Present only while a request is pending.
    pub busy: Option<BusyTicker>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// GPU textures for the two image slots.
#[derive(Default)]
pub struct PreviewState {
    pub original: Option<egui::TextureHandle>,
    pub generated: Option<egui::TextureHandle>,
}

impl PreviewState {
    pub fn clear(&mut self) {
        self.original = None;
        self.generated = None;
    }
}
