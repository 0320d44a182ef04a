use crate::domain::upload::FileVisualState;
use crate::ports::UploadItemPort;
use parking_lot::Mutex;

#[derive(Debug)]
struct ItemState {
    response: Option<String>,
    visual: FileVisualState,
    success_marker: bool,
    dispatched: bool,
    history: Vec<FileVisualState>,
}

/// In-memory upload item.
///
/// Records every visual state it is moved to and refuses to leave a terminal
/// state, so callers can observe how many times an item settled.
#[derive(Debug)]
pub struct InMemoryUploadItem {
    id: String,
    state: Mutex<ItemState>,
}

impl InMemoryUploadItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Mutex::new(ItemState {
                response: None,
                visual: FileVisualState::Pending,
                success_marker: false,
                dispatched: false,
                history: Vec::new(),
            }),
        }
    }

    /// Item whose transfer already succeeded with the given response document.
    pub fn completed(id: impl Into<String>, response: impl Into<String>) -> Self {
        let item = Self::new(id);
        item.complete_transfer(response);
        item
    }

    /// Records a successful storage transfer.
    ///
    /// Like the browser widget, this sets the optimistic success marker
    /// without changing the visual state.
    pub fn complete_transfer(&self, response: impl Into<String>) {
        let mut state = self.state.lock();
        state.response = Some(response.into());
        state.success_marker = true;
    }

    pub fn is_transferred(&self) -> bool {
        self.state.lock().response.is_some()
    }

    /// Claims the item for its one `success` notification.
    ///
    /// Returns `true` exactly once, for a transferred item that has not
    /// settled. Later calls return `false` whatever the outcome was.
    pub fn claim_for_notification(&self) -> bool {
        let mut state = self.state.lock();
        if state.dispatched || state.response.is_none() || state.visual.is_terminal() {
            return false;
        }
        state.dispatched = true;
        true
    }

    pub fn has_success_marker(&self) -> bool {
        self.state.lock().success_marker
    }

    pub fn history(&self) -> Vec<FileVisualState> {
        self.state.lock().history.clone()
    }
}

impl UploadItemPort for InMemoryUploadItem {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn response_document(&self) -> Option<String> {
        self.state.lock().response.clone()
    }

    fn visual_state(&self) -> FileVisualState {
        self.state.lock().visual
    }

    fn clear_success_marker(&self) {
        self.state.lock().success_marker = false;
    }

    fn set_visual_state(&self, next: FileVisualState) {
        let mut state = self.state.lock();
        if !state.visual.can_transition_to(next) {
            return;
        }
        state.visual = next;
        state.success_marker = next == FileVisualState::Success;
        state.history.push(next);
    }
}
