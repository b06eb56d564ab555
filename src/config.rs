use std::cmp::min;

use anyhow::{ensure, Result};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::layout::Granularity;

// Domain and languages
pub const DOMAIN: &str = "gai";
pub const LANGUAGES: [&str; 2] = ["eng", "esp"];

// Paths are relative to the scripts folder the job is started from
pub const BASE_DIR: &str = "..";

pub const MODEL_NAME: &str = "paraphrase-multilingual-MiniLM-L12-v2";
/// Characters per text unit, longer texts get truncated.
pub const MAX_TEXT_LENGTH: usize = 8000;

pub const CREATE_DOCUMENT_VECTORS: bool = true;
pub const CREATE_SECTION_VECTORS: bool = true;
pub const CREATE_PARAGRAPH_VECTORS: bool = true;

pub const DOCUMENT_VECTORS_FILE: &str = "document_vectors.json";
pub const SECTION_VECTORS_FILE: &str = "section_vectors.json";
pub const PARAGRAPH_VECTORS_FILE: &str = "paragraph_vectors.json";
pub const VECTOR_DATA_JS_FILE: &str = "vector_data.js";

pub const SHOW_PROGRESS: bool = true;
pub const VERBOSE: bool = true;
/// `Some(3)` is handy when testing on a few documents.
pub const MAX_DOCUMENTS: Option<usize> = None;

static JOB_CONFIG: Lazy<JobConfiguration> = Lazy::new(JobConfiguration::from_literals);

/// Returns the process wide job configuration.
///
/// Built from the constants above on first access and never mutated afterwards,
/// so the reference can be shared freely between threads.
pub fn job_config() -> &'static JobConfiguration {
    &JOB_CONFIG
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct JobConfiguration {
    pub domain: String,
    pub languages: Vec<String>,
    pub base_dir: String,
    pub corpora_dir: String,
    pub vectors_dir: String,
    pub model_name: String,
    pub max_text_length: usize,
    pub create_document_vectors: bool,
    pub create_section_vectors: bool,
    pub create_paragraph_vectors: bool,
    pub document_vectors_file: String,
    pub section_vectors_file: String,
    pub paragraph_vectors_file: String,
    pub vector_data_js_file: String,
    pub show_progress: bool,
    pub verbose: bool,
    pub max_documents: Option<usize>,
}

impl Default for JobConfiguration {
    fn default() -> Self {
        Self::from_literals()
    }
}

impl JobConfiguration {
    pub fn from_literals() -> Self {
        Self::for_domain(DOMAIN)
    }

    /// Same literals, but with both directories derived from `domain`
    /// (e.g. `"climate"` or `"immigration"`).
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            languages: LANGUAGES.iter().map(|l| l.to_string()).collect(),
            base_dir: BASE_DIR.to_string(),
            corpora_dir: format!("{BASE_DIR}/corpora/{domain}"),
            vectors_dir: format!("{BASE_DIR}/vectors/{domain}"),
            model_name: MODEL_NAME.to_string(),
            max_text_length: MAX_TEXT_LENGTH,
            create_document_vectors: CREATE_DOCUMENT_VECTORS,
            create_section_vectors: CREATE_SECTION_VECTORS,
            create_paragraph_vectors: CREATE_PARAGRAPH_VECTORS,
            document_vectors_file: DOCUMENT_VECTORS_FILE.to_string(),
            section_vectors_file: SECTION_VECTORS_FILE.to_string(),
            paragraph_vectors_file: PARAGRAPH_VECTORS_FILE.to_string(),
            vector_data_js_file: VECTOR_DATA_JS_FILE.to_string(),
            show_progress: SHOW_PROGRESS,
            verbose: VERBOSE,
            max_documents: MAX_DOCUMENTS,
        }
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    pub fn with_document_vectors(mut self, enabled: bool) -> Self {
        self.create_document_vectors = enabled;
        self
    }

    pub fn with_section_vectors(mut self, enabled: bool) -> Self {
        self.create_section_vectors = enabled;
        self
    }

    pub fn with_paragraph_vectors(mut self, enabled: bool) -> Self {
        self.create_paragraph_vectors = enabled;
        self
    }

    pub fn with_max_documents(mut self, max_documents: Option<usize>) -> Self {
        self.max_documents = max_documents;
        self
    }

    pub fn with_show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Checks the invariants a hand adjusted configuration could break.
    ///
    /// # Errors
    /// - Empty domain or language list, or a blank language code.
    /// - `max_text_length` of zero.
    /// - `max_documents` set to `Some(0)`.
    /// - `corpora_dir` or `vectors_dir` no longer derived from `base_dir` and `domain`.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.domain.is_empty(), "domain must not be empty");
        let corpora_dir = format!("{}/corpora/{}", self.base_dir, self.domain);
        ensure!(
            self.corpora_dir == corpora_dir,
            "corpora_dir {:?} does not match domain {:?}, expected {:?}",
            self.corpora_dir, self.domain, corpora_dir
        );
        let vectors_dir = format!("{}/vectors/{}", self.base_dir, self.domain);
        ensure!(
            self.vectors_dir == vectors_dir,
            "vectors_dir {:?} does not match domain {:?}, expected {:?}",
            self.vectors_dir, self.domain, vectors_dir
        );
        ensure!(!self.languages.is_empty(), "at least one language is required");
        if let Some(lang) = self.languages.iter().find(|l| l.trim().is_empty()) {
            anyhow::bail!("language code {:?} is blank", lang);
        }
        ensure!(self.max_text_length > 0, "max_text_length must be positive");
        ensure!(
            self.max_documents != Some(0),
            "max_documents must be positive when set, use None for no cap"
        );
        Ok(())
    }

    /// Granularities switched on, always in document, section, paragraph order.
    pub fn enabled_granularities(&self) -> Vec<Granularity> {
        Granularity::ALL
            .into_iter()
            .filter(|g| g.is_enabled(self))
            .collect()
    }

    /// How many of `available` documents the job should process.
    pub fn document_limit(&self, available: usize) -> usize {
        if let Some(bound) = self.max_documents {
            min(bound, available)
        } else {
            available
        }
    }
}
