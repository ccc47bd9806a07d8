use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::annotation::{Annotator, LexiconAnnotator};
use crate::app_config::Config;
use crate::conversion::Converter;
use crate::errors::AppError;
use crate::file_utils::{FileManager, M2_EXTENSION};
use crate::m2::{Record, RecordBlocks};
use crate::resources::Resources;

// @module: Application controller for corpus conversion

/// Counters for one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    // @field: Records written
    pub records: usize,
    // @field: Annotator entries written
    pub annotators: usize,
    // @field: Edit lines written
    pub edits: usize,
}

impl ConversionStats {
    fn add(&mut self, other: ConversionStats) {
        self.records += other.records;
        self.annotators += other.annotators;
        self.edits += other.edits;
    }
}

/// Main application controller for M2 conversion
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Record converter shared by every file
    converter: Converter,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let language = config.language;
        let resources =
            Resources::load(language, &config.resources).context("Failed to load lexical resources")?;

        let annotator: Box<dyn Annotator> = match &config.resources.lexicon {
            Some(path) => Box::new(
                LexiconAnnotator::load(path, language, resources.tag_map.clone())
                    .context("Failed to load annotation lexicon")?,
            ),
            None => {
                warn!("No lexicon configured, tags and lemmas come from the fallback tagger");
                Box::new(LexiconAnnotator::new(language, resources.tag_map.clone()))
            }
        };

        let converter = Converter::new(config.conversion.options(), resources, annotator);
        Ok(Self { config, converter })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Convert a whole corpus held in memory
    ///
    /// Records are converted in input order. The first malformed record
    /// aborts the conversion with its line number.
    pub fn convert_text(&self, content: &str) -> Result<(String, ConversionStats)> {
        self.convert_blocks(RecordBlocks::new(content).collect(), None)
    }

    fn convert_blocks(
        &self,
        blocks: Vec<(usize, String)>,
        progress_bar: Option<&ProgressBar>,
    ) -> Result<(String, ConversionStats)> {
        let mut output = String::new();
        let mut stats = ConversionStats::default();

        for (line_no, block) in blocks {
            let record = Record::parse(&block, line_no).map_err(AppError::from)?;
            let converted = self
                .converter
                .convert(record)
                .map_err(AppError::from)
                .with_context(|| format!("Failed to convert record starting at line {}", line_no))?;

            stats.records += 1;
            stats.annotators += converted.annotators.len();
            stats.edits += converted.edit_count();
            output.push_str(&converted.to_string());

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        Ok((output, stats))
    }

    /// Convert one corpus file into `output_file`
    ///
    /// Returns `None` when the output exists and overwriting is not forced.
    pub fn run(&self, input_file: PathBuf, output_file: PathBuf, force_overwrite: bool) -> Result<Option<ConversionStats>> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }
        if FileManager::file_exists(&output_file) && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_file);
            return Ok(None);
        }

        let content = FileManager::read_to_string(&input_file)?;
        let blocks: Vec<(usize, String)> = RecordBlocks::new(&content).collect();
        debug!("Read {} records from {:?}", blocks.len(), input_file);

        let progress_bar = ProgressBar::new(blocks.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Converting");

        let result = self.convert_blocks(blocks, Some(&progress_bar));
        progress_bar.finish_and_clear();
        let (output, stats) = result.with_context(|| format!("Failed to convert {:?}", input_file))?;

        FileManager::write_to_file(&output_file, &output)?;

        info!(
            "Converted {} records ({} edits) to {:?} in {}",
            stats.records,
            stats.edits,
            output_file,
            Self::format_duration(start_time.elapsed())
        );

        Ok(Some(stats))
    }

    /// Convert every `*.m2` file under `input_dir` into `output_dir`
    ///
    /// Each output is named `<stem>.<suffix>.m2`. The first file that fails to
    /// convert aborts the run; files whose output is kept are counted as skipped.
    pub fn run_folder(&self, input_dir: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<ConversionStats> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let suffix = &self.config.conversion.output_suffix;
        let corpus_files: Vec<PathBuf> = FileManager::find_files(&input_dir, M2_EXTENSION)?
            .into_iter()
            .filter(|path| !Self::is_converted_output(path, suffix))
            .collect();
        if corpus_files.is_empty() {
            return Err(anyhow!("No M2 files found in directory: {:?}", input_dir));
        }

        FileManager::ensure_dir(&output_dir)?;

        let folder_pb = ProgressBar::new(corpus_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut totals = ConversionStats::default();
        let mut success_count = 0;
        let mut skip_count = 0;

        for corpus_file in &corpus_files {
            let file_name = corpus_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            let output_file = FileManager::generate_output_path(corpus_file, &output_dir, suffix);
            let converted = self
                .run(corpus_file.clone(), output_file, force_overwrite)
                .with_context(|| format!("Failed to convert {}", file_name));
            match converted {
                Ok(Some(stats)) => {
                    totals.add(stats);
                    success_count += 1;
                }
                Ok(None) => skip_count += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", file_name, e);
                    folder_pb.abandon_with_message(format!("Failed on {}", file_name));
                    return Err(e);
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed in {}: {} converted, {} skipped",
            Self::format_duration(start_time.elapsed()),
            success_count,
            skip_count
        );

        Ok(totals)
    }

    // Outputs written into the input folder must not be converted again
    fn is_converted_output(path: &Path, suffix: &str) -> bool {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(&format!(".{}", suffix)))
            .unwrap_or(false)
    }

    /// Format a duration for the summary line
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
