//! Batch orchestration: files → records → validate → normalize → sink.
//!
//! One sequential pass. A bad file or record is recorded in the
//! [`BatchResult`] and the run moves on; only a [`FatalError`] stops it.

use std::fmt;
use std::path::{Path, PathBuf};

use buscadis_catalog::RawRecord;
use serde_json::Value;

use crate::error::{FatalError, FileError, ValidationError};
use crate::normalize::{NormalizeContext, normalize_record};
use crate::progress::{ImportProgress, SilentProgress};
use crate::prompt::Prompter;
use crate::sink::PublicationSink;
use crate::source::FileSource;
use crate::validate::validate_record;

/// Title reported for records that have none.
pub const UNTITLED: &str = "Untitled";

/// Execution mode flags. Independent of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Validate and normalize, but never call the sink.
    pub dry_run: bool,
    /// Skip the confirmation prompt.
    pub force: bool,
}

/// The input files selected for one run.
#[derive(Debug, Clone)]
pub struct ImportPlan {
    pub source: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Which stage rejected a file or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    File,
    Validation,
    Normalization,
    Sink,
}

/// One entry in the batch error list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub file: String,
    /// Record title, or [`UNTITLED`]. `None` for file-level errors.
    pub title: Option<String>,
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} \"{}\": {}", self.file, title, self.message),
            None => write!(f, "{}: {}", self.file, self.message),
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Records seen across all readable files.
    pub total: usize,
    /// Records written (or, in a dry run, that would have been written).
    pub success: usize,
    /// Records rejected by validation or normalization.
    pub skipped: usize,
    /// File, validation, normalization and sink errors in encounter order.
    pub errors: Vec<RecordError>,
}

impl BatchResult {
    fn push_error(
        &mut self,
        progress: &dyn ImportProgress,
        file: &str,
        title: Option<&str>,
        kind: ErrorKind,
        message: String,
    ) {
        let error = RecordError {
            file: file.to_string(),
            title: title.map(str::to_string),
            kind,
            message,
        };
        progress.on_record_error(&error);
        self.errors.push(error);
    }

    /// Errors of one kind.
    pub fn errors_of(&self, kind: ErrorKind) -> impl Iterator<Item = &RecordError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }
}

/// Resolve `source` into the list of JSON files to import.
pub fn plan_import(files: &dyn FileSource, source: &Path) -> Result<ImportPlan, FatalError> {
    if !files.exists(source) {
        return Err(FatalError::SourceNotFound(source.to_path_buf()));
    }
    let listed = files
        .list_json_files(source)
        .map_err(|e| FatalError::SourceUnreadable {
            path: source.display().to_string(),
            source: e,
        })?;
    if listed.is_empty() {
        return Err(FatalError::NoInputFiles(source.to_path_buf()));
    }
    Ok(ImportPlan {
        source: source.to_path_buf(),
        files: listed,
    })
}

/// Drives one import run.
pub struct Importer<'a> {
    files: &'a dyn FileSource,
    ctx: NormalizeContext,
    progress: &'a dyn ImportProgress,
}

impl<'a> Importer<'a> {
    pub fn new(files: &'a dyn FileSource, ctx: NormalizeContext) -> Self {
        Self {
            files,
            ctx,
            progress: &SilentProgress,
        }
    }

    pub fn with_progress(mut self, progress: &'a dyn ImportProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Run the plan.
    ///
    /// Unless `force` or `dry_run` is set, `prompter` is asked once before any
    /// write. A non-dry run requires a sink.
    pub fn run(
        &mut self,
        plan: &ImportPlan,
        options: ImportOptions,
        prompter: &mut dyn Prompter,
        mut sink: Option<&mut dyn PublicationSink>,
    ) -> Result<BatchResult, FatalError> {
        if !options.dry_run {
            if sink.is_none() {
                return Err(FatalError::SinkUnavailable(
                    "no sink configured for a non-dry run".to_string(),
                ));
            }
            if !options.force {
                let message = format!(
                    "Import {} file(s) from {}?",
                    plan.files.len(),
                    plan.source.display()
                );
                if !prompter.confirm(&message).map_err(FatalError::Prompt)? {
                    return Err(FatalError::Cancelled);
                }
            }
        }

        let mut result = BatchResult::default();
        let file_count = plan.files.len();

        for (i, path) in plan.files.iter().enumerate() {
            self.progress.on_file(i + 1, file_count, path);
            let label = file_label(path);

            let records = match self.load_records(path) {
                Ok(records) => records,
                Err(e) => {
                    result.push_error(self.progress, &label, None, ErrorKind::File, e.to_string());
                    continue;
                }
            };

            for value in records {
                result.total += 1;
                self.process_record(&label, value, options, sink.as_deref_mut(), &mut result);
            }
        }

        self.progress.on_complete(&result);
        Ok(result)
    }

    /// Read and parse one file into raw values; a lone object becomes a
    /// one-element batch.
    fn load_records(&self, path: &Path) -> Result<Vec<Value>, FileError> {
        let contents = self.files.read_to_string(path).map_err(|e| FileError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let parsed: Value = serde_json::from_str(&contents).map_err(|e| FileError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        match parsed {
            Value::Array(items) => Ok(items),
            Value::Object(_) => Ok(vec![parsed]),
            _ => Err(FileError::UnexpectedShape {
                path: path.display().to_string(),
            }),
        }
    }

    fn process_record(
        &mut self,
        file: &str,
        value: Value,
        options: ImportOptions,
        sink: Option<&mut (dyn PublicationSink + '_)>,
        result: &mut BatchResult,
    ) {
        let progress = self.progress;

        let Value::Object(mut record) = value else {
            result.skipped += 1;
            result.push_error(
                progress,
                file,
                Some(UNTITLED),
                ErrorKind::Validation,
                ValidationError::NotAnObject.to_string(),
            );
            return;
        };
        let title = record_title(&record);

        if let Err(e) = validate_record(&mut record, &self.ctx.defaults) {
            result.skipped += 1;
            result.push_error(progress, file, Some(&title), ErrorKind::Validation, e.to_string());
            return;
        }

        let publication = match normalize_record(record, &mut self.ctx) {
            Ok(p) => p,
            Err(e) => {
                result.skipped += 1;
                result.push_error(
                    progress,
                    file,
                    Some(&title),
                    ErrorKind::Normalization,
                    e.to_string(),
                );
                return;
            }
        };

        let collection = publication.collection();
        match sink {
            Some(sink) if !options.dry_run => match sink.write(&publication) {
                Ok(()) => {
                    log::debug!("  wrote {} -> {}", publication.id, collection);
                    result.success += 1;
                }
                Err(e) => {
                    result.push_error(progress, file, Some(&title), ErrorKind::Sink, e.to_string());
                }
            },
            _ => {
                log::info!(
                    "  would write {} ({}) -> {}",
                    publication.id,
                    publication.url_path,
                    collection
                );
                result.success += 1;
            }
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn record_title(record: &RawRecord) -> String {
    match record.get("title") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => UNTITLED.to_string(),
    }
}
