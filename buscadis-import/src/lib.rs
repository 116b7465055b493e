//! Import loosely structured advertisement JSON into the publications database.
//!
//! This crate owns the whole ETL path: reconciling legacy field names,
//! validating records against the category taxonomy, normalizing them into the
//! canonical schema, and driving batches file by file with per-record failure
//! isolation.

pub mod batch;
pub mod error;
pub mod heuristic;
pub mod ids;
pub mod migrate;
pub mod normalize;
pub mod progress;
pub mod prompt;
pub mod sink;
pub mod slug;
pub mod source;
pub mod validate;

pub use batch::{
    BatchResult, ErrorKind, ImportOptions, ImportPlan, Importer, RecordError, UNTITLED,
    plan_import,
};
pub use error::{FatalError, FileError, NormalizeError, SinkError, ValidationError};
pub use heuristic::{CATEGORY_RULES, CategoryRule, DEFAULT_CATEGORY, classify_title};
pub use ids::ShortIdGenerator;
pub use migrate::{AliasPolicy, FieldAlias, LEGACY_ALIASES, apply_legacy_aliases};
pub use normalize::{NormalizeContext, normalize_record};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use prompt::{FixedAnswer, Prompter};
pub use sink::{PublicationSink, SqliteSink, log_import, reserve_stored_ids};
pub use slug::{MAX_SLUG_LEN, slugify, url_path};
pub use source::{FileSource, FsSource};
pub use validate::{REQUIRED_FIELDS, validate_record};
