use std::{any::Any, future::Future, panic::AssertUnwindSafe};

use futures_util::FutureExt;
use tokio::task::{AbortHandle, JoinSet};

use crate::{
    entities::job_posting::JobField,
    errors::{AppError, StoreError, StoreOperation},
    repositories::{document_store::DocumentStore, identity::IdentityProvider},
    use_cases::jobs::JobBoard,
    view::state::{ViewMessage, ViewState},
};

/// Drives the job screen. Store calls run as independent tokio tasks whose
/// outcomes come back as [`ViewMessage`]s; only the owner of the view applies them.
pub struct JobBoardView<S, I>
where
    S: DocumentStore,
{
    board: JobBoard<S>,
    identity: I,
    state: ViewState,
    mounted: bool,
    tasks: JoinSet<ViewMessage>,
}

impl<S, I> JobBoardView<S, I>
where
    S: DocumentStore + Clone + 'static,
    I: IdentityProvider,
{
    pub fn new(board: JobBoard<S>, identity: I) -> Self {
        Self::with_state(board, identity, ViewState::default())
    }

    pub fn with_state(board: JobBoard<S>, identity: I, state: ViewState) -> Self {
        JobBoardView {
            board,
            identity,
            state,
            mounted: false,
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn edit(&mut self, field: JobField, value: impl Into<String>) {
        self.apply(ViewMessage::FieldEdited { field, value: value.into() });
    }

    /// Starts the one-time fetch of every posting. Later calls do nothing.
    pub fn mount(&mut self) -> Option<AbortHandle> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.apply(ViewMessage::ListRequested);

        let board = self.board.clone();
        Some(self.tasks.spawn(async move {
            let result = report_panics(board.list_jobs(), StoreOperation::Fetch).await;
            ViewMessage::ListFinished(result)
        }))
    }

    /// Submits the current form as a new posting owned by the signed-in user.
    pub fn submit(&mut self) -> AbortHandle {
        let form = self.state.form.clone();
        let owner = self.identity.current_user_id();

        let board = self.board.clone();
        self.tasks.spawn(async move {
            let result = report_panics(board.create_job(&form, owner), StoreOperation::Create).await;
            ViewMessage::CreateFinished(result)
        })
    }

    /// Waits for the next task to finish and applies its outcome.
    /// Returns `None` when nothing is in flight.
    pub async fn next_update(&mut self) -> Option<&ViewState> {
        loop {
            match self.tasks.join_next().await? {
                Ok(message) => {
                    self.apply(message);
                    return Some(&self.state);
                }
                // Only reachable through an abort handle; there is no outcome to apply.
                Err(e) => tracing::warn!("View task ended without an outcome: {}", e),
            }
        }
    }

    /// Applies completions until no task is in flight.
    pub async fn settle(&mut self) -> &ViewState {
        while self.next_update().await.is_some() {}
        &self.state
    }

    fn apply(&mut self, message: ViewMessage) {
        let state = std::mem::take(&mut self.state);
        self.state = state.update(message);
    }
}

impl<S, I> Drop for JobBoardView<S, I>
where
    S: DocumentStore,
{
    // Requests already sent to the store run to completion.
    fn drop(&mut self) {
        self.tasks.detach_all();
    }
}

/// Turns a panic inside a store call into the failure for `operation`.
async fn report_panics<T>(
    task: impl Future<Output = Result<T, AppError>>,
    operation: StoreOperation,
) -> Result<T, AppError> {
    AssertUnwindSafe(task).catch_unwind().await.unwrap_or_else(|payload| {
        let reason = panic_reason(payload.as_ref());
        tracing::error!(%operation, "Store task panicked: {}", reason);
        Err(AppError::StoreUnavailable {
            operation,
            source: StoreError::TaskFailed(reason),
        })
    })
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
