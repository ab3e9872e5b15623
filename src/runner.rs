// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::options::RunOptions,
    error::{Error, FormatError, Outcome},
    file,
    lookup::LookupClient,
    progress::Progress,
    record::ResultBatch,
};

/// The batch plus how each lookup went. Counts are for reporting only.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub batch: ResultBatch,
    pub ok: usize,
    pub blocked: usize,
    pub failed: usize,
}

impl BatchReport {
    fn tally(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Ok => self.ok += 1,
            Outcome::Blocked => self.blocked += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }
}

/// What a full file-to-file run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub report: BatchReport,
    pub output: PathBuf,
}

impl RunSummary {
    /// Completion text shown to the user, however many lookups failed.
    pub fn message(&self) -> String {
        let r = &self.report;
        let mut msg = format!(
            "Processing completed. Results saved to {}.",
            self.output.display()
        );
        if r.blocked + r.failed > 0 {
            msg.push_str(&format!(
                " ({} of {} lookup(s) returned no data; see {}.)",
                r.blocked + r.failed,
                r.batch.len(),
                crate::config::consts::LOG_FILE
            ));
        }
        msg
    }
}

/// Look up every identifier strictly in order, one at a time.
/// Always yields exactly one record per identifier.
pub fn run(
    client: &LookupClient,
    ids: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> BatchReport {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }
    logf!("Batch: Begin count={}", ids.len());

    let mut report = BatchReport {
        batch: ResultBatch::with_capacity(ids.len()),
        ..BatchReport::default()
    };

    for (i, id) in ids.iter().enumerate() {
        let (record, outcome) = client.lookup(id);
        logd!("Batch: {id} → {} field(s)", record.found_count());

        report.tally(&outcome);
        report.batch.push(record);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i + 1, id, &outcome);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Batch: Done count={} ok={} blocked={} failed={}",
        report.batch.len(), report.ok, report.blocked, report.failed
    );

    report
}

/// Validate and read the input table. Fails before any request is made.
pub fn load_identifiers(input: &Path) -> Result<Vec<String>, FormatError> {
    let ids = file::read_identifiers(input)?;
    if ids.is_empty() {
        return Err(FormatError::NoIdentifiers(input.to_path_buf()));
    }
    Ok(ids)
}

/// Input table → lookups → output table.
pub fn run_file(
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Error> {
    let ids = load_identifiers(&opts.input)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} identifier(s)", ids.len()));
    }
    run_ids(opts, &ids, progress)
}

/// Lookups → output table, for identifiers that were already loaded.
pub fn run_ids(
    opts: &RunOptions,
    ids: &[String],
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Error> {
    // One client for the whole run
    let client = LookupClient::new(opts.lookup.clone())?;
    let report = run(&client, ids, progress);

    let output = file::write_results(&report.batch, &opts.output)?;
    Ok(RunSummary { report, output })
}
