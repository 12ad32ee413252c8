/// Ticket for one requested animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u32);

/// Display refresh callback source.
///
/// A cancelled handle must never be delivered; the controller also drops any
/// frame whose handle is not the one it is waiting for.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Single-slot scheduler polled by the page script.
///
/// The page's `requestAnimationFrame` loop asks for [`FrameQueue::pending`]
/// and feeds it back to the widget with the frame timestamp.
#[derive(Debug)]
pub struct FrameQueue {
    next_id: u32,
    pending: Option<FrameHandle>,
    requested: u32,
    cancelled: u32,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: None,
            requested: 0,
            cancelled: 0,
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.pending = Some(handle);
        self.requested = self.requested.saturating_add(1);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled = self.cancelled.saturating_add(1);
        }
    }
}
