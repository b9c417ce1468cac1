//! Filesystem corpus loader.
//!
//! Walks a directory tree (e.g. the IMDb review layout `train/pos/*.txt`,
//! `train/neg/*.txt`, ...) and loads every `.txt` file as one document.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::CorpusConfig;
use crate::corpus::{Corpus, DocId, Document};
use crate::error::{QuarryError, Result};

/// Load a corpus from `config.data_dir`.
///
/// Files are visited in sorted path order so `DocId` assignment is
/// deterministic across runs. `config.max_docs` caps the corpus size.
pub fn load_corpus(config: &CorpusConfig) -> Result<Corpus> {
    let root = Path::new(&config.data_dir);
    if !root.is_dir() {
        return Err(QuarryError::Corpus(format!(
            "data directory not found: {}",
            config.data_dir
        )));
    }

    let mut paths = Vec::new();
    collect_txt_files(root, &mut paths)?;
    paths.sort();

    if let Some(cap) = config.max_docs {
        paths.truncate(cap);
    }

    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable document");
                continue;
            }
        };
        let name = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        // Ids stay dense even when a file is skipped; Corpus::get relies on it.
        documents.push(Document {
            id: DocId(documents.len() as u32),
            name,
            text,
        });
    }

    if documents.is_empty() {
        warn!(data_dir = %config.data_dir, "no .txt documents found under data directory");
    }
    info!(
        docs = documents.len(),
        data_dir = %config.data_dir,
        "corpus loaded"
    );

    Ok(Corpus::new(documents))
}

fn collect_txt_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_txt_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            out.push(path);
        }
    }
    Ok(())
}
