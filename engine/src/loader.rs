//! Quiz document loading.
//!
//! Two ways in:
//! - **Bulk**: the bundled quizzes plus every `*.json` file in a library
//!   directory. Each document is parsed and validated on its own; failures are
//!   logged and dropped, so one bad file never sinks the batch.
//! - **Single file**: user-supplied content, where failures are returned to
//!   the caller with a message fit for display.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use quizzer_types::{Quiz, ValidationError, decode_quiz_document};

/// Quiz documents compiled into the binary, in menu order.
const BUNDLED: &[(&str, &str)] = &[
    (
        "rust-ownership.json",
        include_str!("../quizzes/rust-ownership.json"),
    ),
    ("http-basics.json", include_str!("../quizzes/http-basics.json")),
    ("unix-shell.json", include_str!("../quizzes/unix-shell.json")),
];

#[derive(Debug, Error)]
pub enum LoadError {
    /// The content is not JSON at all.
    #[error("Invalid JSON file! Please check your file format and try again.")]
    MalformedInput(#[source] serde_json::Error),
    /// Parsed, but not shaped like a quiz.
    #[error("{0}")]
    InvalidQuiz(#[from] ValidationError),
    #[error("Failed to read file")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A loaded quiz and the document name it came from.
#[derive(Debug, Clone)]
pub struct QuizFile {
    pub filename: String,
    pub quiz: Arc<Quiz>,
}

impl QuizFile {
    #[must_use]
    pub fn new(filename: impl Into<String>, quiz: impl Into<Arc<Quiz>>) -> Self {
        Self {
            filename: filename.into(),
            quiz: quiz.into(),
        }
    }
}

/// Parse and validate raw quiz document text.
pub fn parse_quiz(text: &str) -> Result<Quiz, LoadError> {
    let document: Value = serde_json::from_str(text).map_err(LoadError::MalformedInput)?;
    Ok(decode_quiz_document(Some(&document))?)
}

/// Read, parse, and validate a single user-supplied quiz file.
pub async fn load_quiz_from_file(path: &Path) -> Result<Quiz, LoadError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_quiz(&text)
}

/// Turn a batch of retrieved documents into quizzes, keeping their order.
///
/// Documents that failed retrieval, failed to parse, or failed validation are
/// logged and left out.
pub fn load_documents<I, S>(documents: I) -> Vec<QuizFile>
where
    I: IntoIterator<Item = (S, io::Result<String>)>,
    S: Into<String>,
{
    documents
        .into_iter()
        .filter_map(|(filename, content)| {
            let filename = filename.into();
            let parsed = content
                .map_err(|source| LoadError::Read {
                    path: PathBuf::from(&filename),
                    source,
                })
                .and_then(|text| parse_quiz(&text));
            match parsed {
                Ok(quiz) => Some(QuizFile::new(filename, quiz)),
                Err(err) => {
                    tracing::warn!(filename = %filename, "Skipping quiz document: {err}");
                    None
                }
            }
        })
        .collect()
}

/// The quizzes compiled into the binary.
#[must_use]
pub fn bundled_quizzes() -> Vec<QuizFile> {
    load_documents(
        BUNDLED
            .iter()
            .map(|(name, text)| (*name, Ok((*text).to_string()))),
    )
}

/// Load every `*.json` quiz in `dir`, sorted by filename.
///
/// An unreadable directory yields an empty batch.
pub async fn load_quiz_dir(dir: &Path) -> Vec<QuizFile> {
    let paths = match list_json_files(dir).await {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!(path = %dir.display(), "Failed to read quiz directory: {e}");
            return Vec::new();
        }
    };

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        documents.push((filename, tokio::fs::read_to_string(&path).await));
    }

    let quizzes = load_documents(documents);
    tracing::debug!(path = %dir.display(), loaded = quizzes.len(), "Loaded quiz directory");
    quizzes
}

async fn list_json_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            continue;
        }

        // Follows symlinks; directories named *.json are skipped.
        let is_file = tokio::fs::metadata(&path)
            .await
            .is_ok_and(|meta| meta.is_file());
        if is_file {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
