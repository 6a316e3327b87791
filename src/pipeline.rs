//! The analysis pipeline driver.
//!
//! [`AnalysisPipeline`] owns the tokenizer and the ordered analyzer set. It
//! stamps each token with its document position exactly once, hands the
//! token to every analyzer, and renders all reports after the stream ends.
//!
//! # Examples
//!
//! ```
//! use wordscope::analysis::analyzer::TokenCountAnalyzer;
//! use wordscope::config::AnalysisConfig;
//! use wordscope::pipeline::AnalysisPipeline;
//!
//! let mut pipeline = AnalysisPipeline::from_config(&AnalysisConfig::new(3, 10)).unwrap();
//! pipeline.process_text("ab cd, efg! ab").unwrap();
//!
//! let counts = pipeline.analyzer::<TokenCountAnalyzer>().unwrap();
//! assert_eq!(counts.count("ab"), 2);
//!
//! let reports = pipeline.render("doc.txt");
//! assert_eq!(reports.len(), 6);
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{
    Analyzer, BigWordAnalyzer, KeywordAnalyzer, RenderContext, SummaryAnalyzer,
    TokenCountAnalyzer, TokenSizeAnalyzer, UniqueTokenAnalyzer,
};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{DocumentTokens, RegexTokenizer, Tokenizer};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::input::read_lines;
use crate::sink::{Report, ReportSink, write_reports};

/// Number of tokens handed to the analyzers at once in parallel mode.
pub const PARALLEL_BATCH_SIZE: usize = 4096;

/// How a token reaches the analyzers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanOutMode {
    /// Every analyzer sees a token before the next token is read.
    #[default]
    Sequential,

    /// Token batches are dispatched to all analyzers concurrently.
    Parallel,
}

/// Tokenizer plus an ordered set of analyzers.
pub struct AnalysisPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    analyzers: Vec<Box<dyn Analyzer>>,
    fan_out: FanOutMode,
    tokens_processed: usize,
}

impl AnalysisPipeline {
    /// Create a pipeline with no analyzers.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        AnalysisPipeline {
            tokenizer,
            analyzers: Vec::new(),
            fan_out: FanOutMode::default(),
            tokens_processed: 0,
        }
    }

    /// Build the standard six-analyzer pipeline.
    ///
    /// Registration order: summary, unique, big words, token count, token
    /// size, keyword. A keyword list that cannot be loaded leaves the keyword
    /// analyzer empty unless `keywords_required` is set.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let keyword = match &config.keyword_file {
            Some(path) if config.keywords_required => {
                KeywordAnalyzer::load(path, config.keyword_wrap_width)?
            }
            Some(path) => KeywordAnalyzer::load_or_empty(path, config.keyword_wrap_width),
            None => {
                warn!("No keyword list configured; keyword report will be empty");
                KeywordAnalyzer::from_keywords(
                    std::iter::empty::<&str>(),
                    config.keyword_wrap_width,
                )
            }
        };

        let pipeline = Self::new(Arc::new(RegexTokenizer::new()?))
            .with_fan_out(config.fan_out)
            .add_analyzer(Box::new(SummaryAnalyzer::new(config.summary.clone())))
            .add_analyzer(Box::new(UniqueTokenAnalyzer::new()))
            .add_analyzer(Box::new(BigWordAnalyzer::new(config.big_word_min_length)))
            .add_analyzer(Box::new(TokenCountAnalyzer::new()))
            .add_analyzer(Box::new(TokenSizeAnalyzer::new(config.histogram_max_width)))
            .add_analyzer(Box::new(keyword));

        Ok(pipeline)
    }

    /// Append an analyzer to the registration order.
    pub fn add_analyzer(mut self, analyzer: Box<dyn Analyzer>) -> Self {
        debug!("Registered analyzer {}", analyzer.name());
        self.analyzers.push(analyzer);
        self
    }

    /// Set the fan-out mode.
    pub fn with_fan_out(mut self, fan_out: FanOutMode) -> Self {
        self.fan_out = fan_out;
        self
    }

    pub fn fan_out(&self) -> FanOutMode {
        self.fan_out
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Analyzers in registration order.
    pub fn analyzers(&self) -> &[Box<dyn Analyzer>] {
        &self.analyzers
    }

    /// First registered analyzer of type `T`.
    pub fn analyzer<T: Analyzer + 'static>(&self) -> Option<&T> {
        self.analyzers
            .iter()
            .find_map(|analyzer| analyzer.as_any().downcast_ref::<T>())
    }

    /// Tokens dispatched so far.
    pub fn tokens_processed(&self) -> usize {
        self.tokens_processed
    }

    /// Hand one already-positioned token to every analyzer.
    pub fn process_token(&mut self, token: &Token) {
        for analyzer in &mut self.analyzers {
            analyzer.process_token(token);
        }
        self.tokens_processed += 1;
    }

    fn dispatch_batch(&mut self, batch: &[Token]) {
        debug!("Dispatching batch of {} tokens", batch.len());
        self.analyzers.par_iter_mut().for_each(|analyzer| {
            for token in batch {
                analyzer.process_token(token);
            }
        });
        self.tokens_processed += batch.len();
    }

    /// Tokenize `lines` and feed every token through the analyzers.
    ///
    /// Positions continue from the tokens already processed. Returns the
    /// number of tokens read from `lines`. The first read error aborts; in
    /// either fan-out mode every token read before it has been processed.
    pub fn process_lines<I>(&mut self, lines: I) -> Result<usize>
    where
        I: Iterator<Item = Result<String>>,
    {
        let start = self.tokens_processed;
        let tokens = DocumentTokens::new(Arc::clone(&self.tokenizer), lines).starting_after(start);

        match self.fan_out {
            FanOutMode::Sequential => {
                for token in tokens {
                    self.process_token(&token?);
                }
            }
            FanOutMode::Parallel => {
                let mut batch = Vec::with_capacity(PARALLEL_BATCH_SIZE);
                let mut failure = None;
                for token in tokens {
                    match token {
                        Ok(token) => batch.push(token),
                        Err(e) => {
                            failure = Some(e);
                            break;
                        }
                    }
                    if batch.len() == PARALLEL_BATCH_SIZE {
                        self.dispatch_batch(&batch);
                        batch.clear();
                    }
                }
                // Tokens stamped before a read error still reach the analyzers
                if !batch.is_empty() {
                    self.dispatch_batch(&batch);
                }
                if let Some(e) = failure {
                    return Err(e);
                }
            }
        }

        Ok(self.tokens_processed - start)
    }

    /// Analyze an in-memory document.
    pub fn process_text(&mut self, text: &str) -> Result<usize> {
        self.process_lines(text.lines().map(|line| Ok(line.to_string())))
    }

    /// Analyze the document at `path`.
    pub fn process_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let count = self.process_lines(read_lines(path)?)?;
        info!("Processed {count} tokens from {}", path.display());
        Ok(count)
    }

    /// Render every analyzer's report, capturing the timestamp now.
    pub fn render<P: AsRef<Path>>(&self, document_path: P) -> Vec<Report> {
        self.render_with(&RenderContext::new(document_path))
    }

    /// Render every analyzer's report with an explicit context.
    pub fn render_with(&self, context: &RenderContext) -> Vec<Report> {
        self.analyzers
            .iter()
            .map(|analyzer| Report::new(analyzer.name(), analyzer.render(context)))
            .collect()
    }
}

/// Where one report ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenReport {
    pub analyzer: String,
    pub location: String,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub document: PathBuf,
    pub tokens: usize,
    pub reports: Vec<WrittenReport>,
    pub duration_ms: u64,
}

/// Analyze `document` with `config` and persist every report to `sink`.
pub fn run<P: AsRef<Path>>(
    config: &AnalysisConfig,
    document: P,
    sink: &mut dyn ReportSink,
) -> Result<RunSummary> {
    let document = document.as_ref();
    let start_time = Instant::now();

    let mut pipeline = AnalysisPipeline::from_config(config)?;
    let tokens = pipeline.process_file(document)?;
    let reports = pipeline.render(document);
    let reports = write_reports(sink, &reports)?
        .into_iter()
        .map(|(analyzer, location)| WrittenReport { analyzer, location })
        .collect();

    Ok(RunSummary {
        document: document.to_path_buf(),
        tokens,
        reports,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}
