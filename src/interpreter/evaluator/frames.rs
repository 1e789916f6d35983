/// The stack of activation records for user-defined function calls.
///
/// Each frame is the owned sequence of argument values of one active call;
/// argument references resolve against the top frame only. Frames are pushed
/// and popped as units, so a callee can never see or disturb its caller's
/// arguments, no matter how calls nest.
#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<Vec<f64>>,
}

impl FrameStack {
    /// Creates an empty frame stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Opens a frame for a call with the given argument values.
    pub(crate) fn push(&mut self, arguments: Vec<f64>) {
        self.frames.push(arguments);
    }

    /// Closes the most recent frame. A no-op on an empty stack.
    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    /// Looks up argument `index` of the active frame.
    ///
    /// Returns `None` when the index is out of range for the frame or when no
    /// call is active at all.
    pub(crate) fn argument(&self, index: usize) -> Option<f64> {
        self.frames.last().and_then(|frame| frame.get(index).copied())
    }

    /// The number of currently active calls.
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Drops every frame. Called when a statement aborts, so no partial call
    /// state leaks into the next statement.
    pub(crate) fn clear(&mut self) {
        self.frames.clear();
    }
}
