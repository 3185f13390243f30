//! Ledger session service
//!
//! Owns one store together with the undo stack, today queue, and selection
//! for a single run of the application, and implements the user-facing
//! actions on top of them.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::display::format_queue_line;
use crate::error::DompetResult;
use crate::models::{Record, RecordForm, Summary};
use crate::session::{SelectionController, SelectionState, SessionQueue, UndoStack};
use crate::storage::LedgerStore;

/// Everything one user session needs: store plus in-memory state
#[derive(Debug)]
pub struct LedgerSession {
    store: LedgerStore,
    undo: UndoStack,
    today: SessionQueue,
    selection: SelectionController,
    currency_symbol: String,
}

impl LedgerSession {
    pub fn new(store: LedgerStore, currency_symbol: impl Into<String>) -> Self {
        Self {
            store,
            undo: UndoStack::new(),
            today: SessionQueue::new(),
            selection: SelectionController::new(),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn records(&self) -> DompetResult<Vec<Record>> {
        self.store.load()
    }

    /// Add a new record dated today
    pub fn add(&mut self, form: &RecordForm) -> DompetResult<Vec<Record>> {
        self.add_dated(Local::now().date_naive(), form)
    }

    /// Add a new record with an explicit date
    ///
    /// Rejected while a row is selected for editing. A valid record is
    /// appended to the ledger and its summary is queued for today's list.
    pub fn add_dated(&mut self, date: NaiveDate, form: &RecordForm) -> DompetResult<Vec<Record>> {
        self.selection.ensure_can_append()?;
        let record = Record::new(date, form.validate()?);
        let line = format_queue_line(&record, &self.currency_symbol);

        let records = self.store.append(record)?;
        self.today.enqueue(line);
        Ok(records)
    }

    /// Delete the record at `index`, keeping it for undo
    ///
    /// Any selection is cleared because positions after `index` shift.
    pub fn delete(&mut self, index: usize) -> DompetResult<Record> {
        let (removed, _) = self.store.delete_at(index)?;
        self.undo.push(removed.clone());
        self.selection.reset();
        Ok(removed)
    }

    /// Restore the most recently deleted record at the end of the ledger
    pub fn undo_delete(&mut self) -> DompetResult<Record> {
        let record = self.undo.pop()?;

        if let Err(err) = self.store.append(record.clone()) {
            self.undo.push(record);
            return Err(err);
        }

        info!(category = %record.category, "restored deleted record");
        Ok(record)
    }

    /// Select the row at `index` for editing
    pub fn begin_edit(&mut self, index: usize) -> DompetResult<Record> {
        self.selection.begin_edit(&self.store, index)
    }

    /// Save `form` over the selected row
    pub fn commit_edit(&mut self, form: &RecordForm) -> DompetResult<Vec<Record>> {
        self.selection.commit_edit(&self.store, form)
    }

    pub fn cancel_edit(&mut self) {
        self.selection.cancel_edit();
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_editing()
    }

    pub fn summary(&self) -> DompetResult<Summary> {
        self.store.summarize()
    }

    /// Summaries of the records added during this session, oldest first
    pub fn today(&self) -> Vec<String> {
        self.today.snapshot()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// The record the next undo would restore
    pub fn next_undo(&self) -> Option<&Record> {
        self.undo.peek()
    }
}
