use std::io::Write;
use std::path::Path;

use super::{create_owner_only, ExportError};
use crate::card::Flashcard;

/// Write `cards` as a pretty-printed JSON array (2-space indent).
pub fn write_json(cards: &[Flashcard], path: &Path) -> Result<(), ExportError> {
    let data = serde_json::to_vec_pretty(cards).map_err(|e| ExportError::write(path, e.into()))?;
    let mut file = create_owner_only(path).map_err(|e| ExportError::write(path, e))?;
    file.write_all(&data)
        .map_err(|e| ExportError::write(path, e))
}
