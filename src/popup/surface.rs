//! The three fixed display regions of the popup.

/// Sink for popup output. Implementations decide how regions are shown.
pub trait PopupSurface {
    /// Show `title`, or clear the title region when `None`.
    fn set_title(&mut self, title: Option<&str>);
    fn set_status(&mut self, status: &str);
    fn set_output(&mut self, output: &str);
}

/// In-memory surface holding the current contents of each region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupDisplay {
    pub title: String,
    pub status: String,
    pub output: String,
}

impl PopupSurface for PopupDisplay {
    fn set_title(&mut self, title: Option<&str>) {
        self.title = title.unwrap_or_default().to_string();
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn set_output(&mut self, output: &str) {
        self.output = output.to_string();
    }
}
