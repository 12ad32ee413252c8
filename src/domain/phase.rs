/// Interaction mode of the widget.
///
/// A single enum keeps dragging and simulating mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Disabled,
    /// Enabled and at rest
    Idle,
    Dragging,
    Simulating,
}

impl Phase {
    pub fn is_enabled(self) -> bool {
        self != Phase::Disabled
    }

    pub fn is_dragging(self) -> bool {
        self == Phase::Dragging
    }

    pub fn is_simulating(self) -> bool {
        self == Phase::Simulating
    }
}
