/// How the entry animation is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinStyle {
    /// One full spin; physics turns on when it ends
    Spin,
    /// Short progress pulse for users who prefer reduced motion
    Progress,
}

impl SpinStyle {
    /// Class the page script puts on the logo element
    pub fn css_class(self) -> &'static str {
        match self {
            SpinStyle::Spin => "gelolabs-copilot-spinning",
            SpinStyle::Progress => "gelolabs-copilot-progress",
        }
    }
}

/// Entry animation played when the copilot becomes busy.
///
/// The logo spins once per page. Later requests are ignored unless their
/// reason contains `manual` or `force`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntrySpin {
    spinning: bool,
    has_spun_once: bool,
    reduced_motion: bool,
}

impl EntrySpin {
    /// Returns false when the request was skipped
    pub fn start(&mut self, reason: &str) -> bool {
        let forced = reason.contains("manual") || reason.contains("force");
        if self.has_spun_once && !forced {
            return false;
        }
        self.spinning = true;
        self.has_spun_once = true;
        true
    }

    pub fn stop(&mut self) {
        self.spinning = false;
    }

    /// New page: the logo may spin again. The motion preference is kept.
    pub fn reset(&mut self) {
        self.spinning = false;
        self.has_spun_once = false;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn has_spun_once(&self) -> bool {
        self.has_spun_once
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn style(&self) -> SpinStyle {
        if self.reduced_motion {
            SpinStyle::Progress
        } else {
            SpinStyle::Spin
        }
    }
}
