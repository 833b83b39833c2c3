//! Set command implementation.

use anyhow::{Context, Result, bail};

use trainer_core::{EditSession, FieldEdit, NoNames};

use crate::Args;

/// Parse a modifier edit given as `slot:word`, e.g. `0:a00f0001`.
fn parse_modifier(spec: &str) -> Result<FieldEdit> {
    let (slot, word) = spec
        .split_once(':')
        .context("modifier must be given as slot:word")?;
    let slot: usize = slot.parse().context("bad modifier slot")?;
    Ok(FieldEdit::Modifier(slot, word.to_string()))
}

/// Scan, stage the requested edits for one item, and write them back.
pub fn run(
    args: &Args,
    index: usize,
    id: Option<String>,
    value: Option<u32>,
    page: Option<i32>,
    modifier: Option<String>,
) -> Result<()> {
    let mut edits: Vec<FieldEdit> = Vec::new();
    if let Some(id) = id {
        edits.push(FieldEdit::Id(id));
    }
    if let Some(value) = value {
        edits.push(FieldEdit::Value(value));
    }
    if let Some(page) = page {
        edits.push(FieldEdit::Page(page));
    }
    if let Some(spec) = modifier {
        edits.push(parse_modifier(&spec)?);
    }
    if edits.is_empty() {
        bail!("nothing to change; pass --id, --value, --page or --modifier");
    }

    let table = crate::load_table(args)?;
    let offsets = crate::resolve_offsets(args, &table)?;
    let client = crate::connect(args)?;
    let cancel = crate::cancel_flag()?;

    let mut session = EditSession::new(client, offsets);
    session.scan(&NoNames, &cancel, |_, _| {})?;

    let item = session
        .items()
        .get(index)
        .with_context(|| format!("no item at index {index} (scan found {})", session.items().len()))?
        .clone();
    println!("Editing [{index}] {} at {:#010x}", item.id, item.base_address);

    for edit in edits {
        session.stage(index, edit)?;
    }
    let written = session.save()?;
    println!("{written} field(s) written");

    session.into_memory().close()?;
    Ok(())
}
