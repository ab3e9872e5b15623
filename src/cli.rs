// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{consts::{BASE_URL, DEFAULT_OUTPUT_FILE, LOG_FILE, USER_AGENT}, options::{LookupOptions, RunOptions}},
    error::{Error, Outcome},
    progress::Progress,
    runner,
};

/// Look up every tax code / ID number in column A of a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "mst_scan", version, about)]
pub struct Args {
    /// Input spreadsheet (.xls or .xlsx); identifiers are read from column A of the first sheet
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output spreadsheet, overwritten if present
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Lookup site root
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// User-Agent sent with every request
    #[arg(long, default_value = USER_AGENT)]
    pub user_agent: String,

    /// Debug log file
    #[arg(long, default_value = LOG_FILE)]
    pub log_file: PathBuf,

    /// No progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            lookup: LookupOptions {
                base_url: self.base_url.clone(),
                user_agent: self.user_agent.clone(),
            },
        }
    }
}

/// Terminal progress bar; one tick per identifier.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet { ProgressBar::hidden() } else { ProgressBar::new(0) };
        if let Ok(style) = ProgressStyle::with_template("{bar:40.green/white} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        Self { bar }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.bar.set_length(total as u64);
    }
    fn log(&mut self, msg: &str) {
        self.bar.println(msg);
    }
    fn item_done(&mut self, done: usize, id: &str, outcome: &Outcome) {
        self.bar.set_position(done as u64);
        match outcome {
            Outcome::Ok => self.bar.set_message(s!(id)),
            Outcome::Blocked => self.bar.set_message(format!("{id} (blocked)")),
            Outcome::Failed(_) => self.bar.set_message(format!("{id} (failed)")),
        }
    }
    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

pub fn run(args: Args) -> Result<(), Error> {
    crate::log::init(&args.log_file);

    let opts = args.run_options();
    logf!("CLI: input={} output={}", opts.input.display(), opts.output.display());

    let mut prog = CliProgress::new(args.quiet);
    let summary = runner::run_file(&opts, Some(&mut prog))?;

    println!("{}", summary.message());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_live_site() {
        let args = Args::try_parse_from(["cli", "-i", "ids.xlsx"]).unwrap();
        let opts = args.run_options();
        assert_eq!(opts.input, PathBuf::from("ids.xlsx"));
        assert_eq!(opts.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(opts.lookup, LookupOptions::default());
        assert!(!args.quiet);
    }

    #[test]
    fn overrides_are_mapped() {
        let args = Args::try_parse_from([
            "cli", "--input", "in.xls", "--output", "out/r.xlsx",
            "--base-url", "http://127.0.0.1:9000", "--user-agent", "test-agent", "-q",
        ])
        .unwrap();
        let opts = args.run_options();
        assert_eq!(opts.output, PathBuf::from("out/r.xlsx"));
        assert_eq!(opts.lookup.base_url, "http://127.0.0.1:9000");
        assert_eq!(opts.lookup.user_agent, "test-agent");
        assert!(args.quiet);
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["cli"]).is_err());
    }
}
