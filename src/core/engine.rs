use crate::config::PipelineConfig;
use crate::core::annotate::annotate_candidates;
use crate::core::assign::assign_difficulties;
use crate::core::candidates::build_candidates;
use crate::core::frequency::FrequencyTable;
use crate::core::schedule::{interleave_for_schedule, schedule_puzzles};
use crate::core::select::select_by_quota;
use crate::core::types::{Dictionary, DifficultyCounts, PuzzleSchedule, SCHEDULE_FORMAT_VERSION};
use crate::core::validator::verify_schedule;
use crate::error::Result;
use crate::persistence::{load_dictionary, load_frequency_table, publish_schedule, sanitize_words, PublishOutcome};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

/// Counts gathered while curating, for the end-of-run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CurationReport {
    pub base_candidates: usize,
    pub eligible: usize,
    pub published: usize,
    pub difficulty_mix: DifficultyCounts,
    pub shortages: DifficultyCounts,
    pub borrowed: usize,
    pub fallback: usize,
    pub frequency_rows: usize,
}

#[derive(Debug, Clone)]
pub struct CurationRun {
    pub schedule: PuzzleSchedule,
    pub report: CurationReport,
}

/// Holds the inputs of a curation run. Every stage is a pure function of
/// these plus the start date and count.
pub struct CurationEngine {
    dictionary: Dictionary,
    frequency: FrequencyTable,
}

impl CurationEngine {
    /// Sanitizes `dictionary.words` so every stage sees unique lowercase words.
    pub fn new(dictionary: Dictionary, frequency: FrequencyTable) -> Self {
        let (words, dropped) = sanitize_words(dictionary.words);
        if dropped > 0 {
            debug!(dropped, "dictionary entries skipped while building engine");
        }
        Self {
            dictionary: Dictionary {
                version: dictionary.version,
                words,
            },
            frequency,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let dictionary = load_dictionary(&config.dictionary_path)?;
        let frequency = load_frequency_table(&config.frequency_path)?;
        Ok(Self::new(dictionary, frequency))
    }

    /// Builds the schedule of up to `count` puzzles starting at `start`.
    /// The start date doubles as the selection seed.
    pub fn curate(&self, start: NaiveDate, count: usize, generated_at: DateTime<Utc>) -> Result<CurationRun> {
        let words = &self.dictionary.words;
        let seed = start.to_string();

        let base = build_candidates(words);
        let annotated = annotate_candidates(&base, words, &self.frequency);
        let assigned = assign_difficulties(&annotated);
        let selection = select_by_quota(&assigned, count, &seed);

        let report = CurationReport {
            base_candidates: base.len(),
            eligible: assigned.len(),
            published: selection.candidates.len(),
            difficulty_mix: selection.difficulty_mix(),
            shortages: selection.shortages,
            borrowed: selection.borrowed,
            fallback: selection.fallback,
            frequency_rows: self.frequency.rows_loaded(),
        };

        let ordered = interleave_for_schedule(selection.candidates);
        let puzzles = schedule_puzzles(ordered, start, &self.dictionary.version);
        verify_schedule(&puzzles, start, &self.dictionary)?;

        info!(
            base_candidates = report.base_candidates,
            eligible = report.eligible,
            published = report.published,
            "puzzle curation complete"
        );

        Ok(CurationRun {
            schedule: PuzzleSchedule {
                version: SCHEDULE_FORMAT_VERSION.to_string(),
                generated_at,
                source_dictionary_version: self.dictionary.version.clone(),
                puzzles,
            },
            report,
        })
    }
}

/// Loads inputs, curates, and publishes unless `config.dry_run` is set.
/// Returns the run and the publish outcome (`None` on a dry run).
pub fn run(config: &PipelineConfig, generated_at: DateTime<Utc>) -> Result<(CurationRun, Option<PublishOutcome>)> {
    let engine = CurationEngine::from_config(config)?;
    let run = engine.curate(config.start_date, config.count, generated_at)?;

    if config.dry_run {
        info!(path = %config.output_path.display(), "dry run, schedule not published");
        return Ok((run, None));
    }
    let outcome = publish_schedule(&config.output_path, &run.schedule)?;
    Ok((run, Some(outcome)))
}
