//! Row selection and the edit protocol
//!
//! Selecting a row loads its record into the entry form and remembers the
//! row's index. Committing writes the form back to that index. Because rows
//! are addressed by position, a delete anywhere in the ledger invalidates
//! the selection.

use tracing::warn;

use crate::error::{DompetError, DompetResult};
use crate::models::{Record, RecordForm};
use crate::storage::LedgerStore;

/// Whether a row is currently loaded for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Editing(usize),
}

/// State machine tying a selected row to its record in the store
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The index being edited, if any
    pub fn editing_index(&self) -> Option<usize> {
        match self.state {
            SelectionState::Editing(index) => Some(index),
            SelectionState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_index().is_some()
    }

    /// Select `index` for editing and return its current values
    ///
    /// Allowed from any state. An invalid index leaves the state as it was.
    pub fn begin_edit(&mut self, store: &LedgerStore, index: usize) -> DompetResult<Record> {
        let record = store.get(index)?;
        self.state = SelectionState::Editing(index);
        Ok(record)
    }

    /// Write `form` over the selected record
    ///
    /// On success the controller returns to idle. On failure, including a
    /// validation error in the form, the selection is kept so the caller can
    /// correct the form and try again.
    pub fn commit_edit(&mut self, store: &LedgerStore, form: &RecordForm) -> DompetResult<Vec<Record>> {
        let Some(index) = self.editing_index() else {
            warn!("commit requested with no row selected");
            return Err(DompetError::State(
                "no row is selected; select a row before saving changes".into(),
            ));
        };

        let fields = form.validate()?;
        let records = store.update_at(index, fields)?;
        self.state = SelectionState::Idle;
        Ok(records)
    }

    /// Drop the selection; any pending form edits are discarded by the caller
    pub fn cancel_edit(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Refuse to add a new record while a row is selected
    pub fn ensure_can_append(&self) -> DompetResult<()> {
        match self.state {
            SelectionState::Idle => Ok(()),
            SelectionState::Editing(index) => {
                warn!(index, "add rejected while editing");
                Err(DompetError::State(
                    "a row is selected; use commit to save changes or cancel first".into(),
                ))
            }
        }
    }

    /// Force the controller back to idle after the index space has shifted
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }
}
