use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use buscadis_catalog::ImportSettings;
use buscadis_import::{
    BatchResult, FatalError, FsSource, ImportOptions, ImportProgress, Importer, LogProgress,
    NormalizeContext, Prompter, RecordError, SqliteSink, log_import, plan_import,
    reserve_stored_ids,
};

use crate::error::CliError;

/// Arguments for `buscadis import`.
pub(crate) struct ImportArgs {
    pub source: PathBuf,
    pub dry_run: bool,
    pub force: bool,
    pub db: Option<PathBuf>,
    pub default_city: Option<String>,
}

/// Import a directory (or single file) of advertisement JSON.
///
/// Record-level failures are reported in the summary and do not affect the
/// exit status; only fatal errors are returned.
pub(crate) fn run_import(
    mut settings: ImportSettings,
    args: ImportArgs,
    quiet: bool,
    verbose: bool,
) -> Result<(), CliError> {
    if let Some(city) = &args.default_city {
        settings.set_default_region(city);
    }

    let plan = plan_import(&FsSource, &args.source)?;
    log::info!(
        "{} {} file(s) from {}{}",
        "Importing".if_supports_color(Stdout, |t| t.bold()),
        plan.files.len(),
        plan.source.display().if_supports_color(Stdout, |t| t.cyan()),
        if args.dry_run {
            " (dry run)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
        } else {
            String::new()
        },
    );

    let options = ImportOptions {
        dry_run: args.dry_run,
        force: args.force,
    };
    // The bar would hide per-file log lines, so verbose runs log instead.
    let bar = BarProgress::new(plan.files.len(), quiet);
    let progress: &dyn ImportProgress = if verbose { &LogProgress } else { &bar };
    let mut prompter = StdinPrompter;
    let mut ctx = NormalizeContext::from_settings(&settings);

    let result = if args.dry_run {
        Importer::new(&FsSource, ctx)
            .with_progress(progress)
            .run(&plan, options, &mut prompter, None)?
    } else {
        let db_path = super::resolve_db_path(args.db, &settings);
        let conn = buscadis_db::open_database(&db_path).map_err(|e| {
            FatalError::SinkUnavailable(format!("{}: {}", db_path.display(), e))
        })?;
        let reserved = reserve_stored_ids(&conn, &mut ctx.ids)
            .map_err(|e| FatalError::SinkUnavailable(e.to_string()))?;
        log::debug!(
            "Opened database at {} ({} stored short ids)",
            db_path.display(),
            reserved
        );

        let mut sink = SqliteSink::new(&conn);
        let result = Importer::new(&FsSource, ctx)
            .with_progress(progress)
            .run(&plan, options, &mut prompter, Some(&mut sink))?;

        match log_import(&conn, &plan.source, plan.files.len(), &result) {
            Ok(id) => log::debug!("Recorded import #{}", id),
            Err(e) => log::warn!("Failed to record import log: {}", e),
        }
        result
    };

    print_summary(&result, args.dry_run);
    Ok(())
}

/// Reads a y/N answer from stdin.
struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        print!("\n  {} [y/N] ", message);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(is_yes(&input))
    }
}

fn is_yes(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Per-file progress bar on stderr.
struct BarProgress {
    pb: ProgressBar,
}

impl BarProgress {
    fn new(files: usize, quiet: bool) -> Self {
        let pb = ProgressBar::with_draw_target(
            Some(files as u64),
            if quiet {
                ProgressDrawTarget::hidden()
            } else {
                ProgressDrawTarget::stderr()
            },
        );
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Self { pb }
    }
}

impl ImportProgress for BarProgress {
    fn on_file(&self, current: usize, _total: usize, path: &Path) {
        self.pb.set_position(current.saturating_sub(1) as u64);
        self.pb.set_message(file_name(path));
    }

    // Listed in the summary instead.
    fn on_record_error(&self, _error: &RecordError) {}

    fn on_complete(&self, _result: &BatchResult) {
        self.pb.finish_and_clear();
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn print_summary(result: &BatchResult, dry_run: bool) {
    log::info!("");
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Total records: {}", result.total);
    log::info!(
        "  {} {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        result.success,
        if dry_run { "would be imported" } else { "imported" },
    );
    if result.skipped > 0 {
        log::warn!(
            "  {} {} skipped",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            result.skipped,
        );
    }
    if !result.errors.is_empty() {
        log::warn!(
            "  {} {} error(s):",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            result.errors.len(),
        );
        for error in &result.errors {
            log::warn!(
                "    {} {}: {}",
                error.file.if_supports_color(Stdout, |t| t.dimmed()),
                error
                    .title
                    .as_deref()
                    .unwrap_or("(file)")
                    .if_supports_color(Stdout, |t| t.bold()),
                error.message,
            );
        }
    }
}
