use std::sync::atomic::AtomicBool;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::inventory::{FieldEdit, Item, NameLookup, WriteOp, encode_field, scan_inventory};
use crate::memory::RemoteMemory;
use crate::offset::VersionOffsets;

/// Lifecycle of one edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Scanning,
    Populated,
    Saving,
}

/// Connected edit session over one console link.
///
/// Owns the remote memory handle, the active version's offsets, the decoded
/// item list and staged edits. State machine:
/// `Idle → Scanning → Populated → (Editing)* → Saving → Populated`.
/// Writes are impossible while a scan is running; saves touch only staged
/// fields and are best-effort per field, never transactional.
pub struct EditSession<M: RemoteMemory> {
    memory: M,
    offsets: VersionOffsets,
    state: SessionState,
    items: Vec<Item>,
    staged: Vec<(usize, FieldEdit)>,
}

impl<M: RemoteMemory> EditSession<M> {
    pub fn new(memory: M, offsets: VersionOffsets) -> Self {
        Self {
            memory,
            offsets,
            state: SessionState::Idle,
            items: Vec::new(),
            staged: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn offsets(&self) -> &VersionOffsets {
        &self.offsets
    }

    pub fn staged_edits(&self) -> usize {
        self.staged.len()
    }

    /// Rebuild the item list from console memory. Staged edits are dropped:
    /// they refer to addresses of the previous population.
    pub fn scan<F>(
        &mut self,
        names: &dyn NameLookup,
        cancel: &AtomicBool,
        progress: F,
    ) -> Result<&[Item]>
    where
        F: FnMut(usize, usize),
    {
        self.state = SessionState::Scanning;
        self.staged.clear();
        match scan_inventory(&mut self.memory, &self.offsets, names, cancel, progress) {
            Ok(items) => {
                self.items = items;
                self.state = SessionState::Populated;
                Ok(&self.items)
            }
            Err(e) => {
                self.items.clear();
                self.state = SessionState::Idle;
                Err(e)
            }
        }
    }

    /// Stage an edit for one item. Validated immediately; an invalid value
    /// is rejected here and nothing is ever written for it.
    pub fn stage(&mut self, item_index: usize, edit: FieldEdit) -> Result<()> {
        if self.state != SessionState::Populated {
            return Err(Error::Protocol("no scanned inventory to edit".into()));
        }
        let item = self
            .items
            .get(item_index)
            .ok_or_else(|| Error::Validation(format!("no item at index {item_index}")))?;
        encode_field(item, &edit)?;
        self.staged.push((item_index, edit));
        Ok(())
    }

    /// Write every staged edit back to the console.
    ///
    /// Fields already written stay committed if a later write fails; the
    /// failed edit and everything after it remain staged for a retry.
    pub fn save(&mut self) -> Result<usize> {
        if self.state != SessionState::Populated {
            return Err(Error::Protocol("nothing scanned, nothing to save".into()));
        }
        self.state = SessionState::Saving;

        let mut written = 0;
        while let Some((item_index, edit)) = self.staged.first().cloned() {
            let item = &self.items[item_index];
            let ops = match encode_field(item, &edit) {
                Ok(ops) => ops,
                Err(e) => {
                    // Staged edits were validated, but drop it rather than
                    // wedge the queue.
                    warn!("Dropping unencodable staged edit: {e}");
                    self.staged.remove(0);
                    continue;
                }
            };
            if let Err(e) = apply_ops(&mut self.memory, &ops) {
                self.state = SessionState::Populated;
                return Err(e);
            }
            apply_edit_locally(&mut self.items[item_index], &edit);
            self.staged.remove(0);
            written += 1;
        }

        info!("Saved {written} field edits");
        self.state = SessionState::Populated;
        Ok(written)
    }

    /// Tear down the session, returning the memory handle for disconnect.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

fn apply_ops<M: RemoteMemory>(memory: &mut M, ops: &[WriteOp]) -> Result<()> {
    for op in ops {
        match op {
            WriteOp::Bytes { address, data } => memory.write_bytes(*address, data)?,
            WriteOp::Word { address, value } => memory.write_u32(*address, *value)?,
        }
    }
    Ok(())
}

/// Mirror a committed write into the decoded item so the list stays in sync
/// without a rescan.
fn apply_edit_locally(item: &mut Item, edit: &FieldEdit) {
    match edit {
        FieldEdit::Id(id) => item.id = id.clone(),
        FieldEdit::Value(value) => item.value = *value,
        FieldEdit::Page(page) => item.page = *page,
        FieldEdit::Modifier(index, hex) => item.modifiers[*index] = hex.clone(),
    }
}
