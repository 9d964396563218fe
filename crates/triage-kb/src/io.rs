//! JSON loading and output writing for knowledge bases.

use std::fs;
use std::path::Path;

use tracing::info;

use triage_model::{KnowledgeBase, RawKnowledgeBase, ReverseIndex};

use crate::error::{KbError, Result};

/// Load a raw knowledge base from a JSON file.
///
/// Missing or unparseable files are fatal: the caller gets an error and
/// no partial knowledge base.
pub fn load_raw_knowledge_base(path: &Path) -> Result<RawKnowledgeBase> {
    let contents = fs::read_to_string(path).map_err(|source| KbError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawKnowledgeBase =
        serde_json::from_str(&contents).map_err(|source| KbError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), records = raw.diseases.len(), "loaded raw knowledge base");
    Ok(raw)
}

/// Load a canonicalized knowledge base from a JSON file.
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase> {
    let contents = fs::read_to_string(path).map_err(|source| KbError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| KbError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the canonicalized knowledge base as pretty-printed JSON.
pub fn write_knowledge_base(path: &Path, kb: &KnowledgeBase) -> Result<()> {
    let rendered = serde_json::to_string_pretty(kb).map_err(|source| KbError::Serialize {
        what: "knowledge base",
        source,
    })?;
    fs::write(path, rendered).map_err(|source| KbError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the reverse symptom index as pretty-printed JSON.
pub fn write_reverse_index(path: &Path, index: &ReverseIndex) -> Result<()> {
    let rendered = serde_json::to_string_pretty(index).map_err(|source| KbError::Serialize {
        what: "reverse index",
        source,
    })?;
    fs::write(path, rendered).map_err(|source| KbError::Write {
        path: path.to_path_buf(),
        source,
    })
}
