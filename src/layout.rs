//! Where the vectorization job reads corpora from and writes vectors to.
//!
//! Everything here is string and path arithmetic on a [`JobConfiguration`];
//! nothing touches the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::JobConfiguration;

pub const CORPUS_FILE_EXTENSION: &str = "json";

/// The text unit a vector is produced for.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Document,
    Section,
    Paragraph,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Document, Granularity::Section, Granularity::Paragraph];

    pub fn is_enabled(self, config: &JobConfiguration) -> bool {
        match self {
            Granularity::Document => config.create_document_vectors,
            Granularity::Section => config.create_section_vectors,
            Granularity::Paragraph => config.create_paragraph_vectors,
        }
    }

    pub fn file_name(self, config: &JobConfiguration) -> &str {
        match self {
            Granularity::Document => &config.document_vectors_file,
            Granularity::Section => &config.section_vectors_file,
            Granularity::Paragraph => &config.paragraph_vectors_file,
        }
    }
}

/// `<corpora_dir>/<language>`
pub fn corpus_dir(config: &JobConfiguration, language: &str) -> PathBuf {
    Path::new(&config.corpora_dir).join(language)
}

/// One corpus folder per configured language, in processing order.
pub fn corpus_dirs(config: &JobConfiguration) -> Vec<(String, PathBuf)> {
    config
        .languages
        .iter()
        .map(|lang| (lang.clone(), corpus_dir(config, lang)))
        .collect()
}

pub fn is_corpus_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == CORPUS_FILE_EXTENSION)
}

pub fn output_path(config: &JobConfiguration, granularity: Granularity) -> PathBuf {
    Path::new(&config.vectors_dir).join(granularity.file_name(config))
}

/// Output files for the granularities that are switched on.
pub fn planned_outputs(config: &JobConfiguration) -> Vec<(Granularity, PathBuf)> {
    config
        .enabled_granularities()
        .into_iter()
        .map(|g| (g, output_path(config, g)))
        .collect()
}

pub fn vector_data_js_path(config: &JobConfiguration) -> PathBuf {
    Path::new(&config.vectors_dir).join(&config.vector_data_js_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::job_config;

    #[test]
    fn corpus_dirs_per_language() {
        let dirs = corpus_dirs(job_config());
        assert_eq!(
            dirs,
            vec![
                ("eng".to_string(), PathBuf::from("../corpora/gai/eng")),
                ("esp".to_string(), PathBuf::from("../corpora/gai/esp")),
            ]
        );
    }

    #[test]
    fn output_paths_live_under_vectors_dir() {
        let config = job_config();
        assert_eq!(
            output_path(config, Granularity::Section),
            PathBuf::from("../vectors/gai/section_vectors.json")
        );
        assert_eq!(vector_data_js_path(config), PathBuf::from("../vectors/gai/vector_data.js"));
    }

    #[test]
    fn planned_outputs_skip_disabled_granularities() {
        let config = JobConfiguration::default().with_document_vectors(false);
        let outputs = planned_outputs(&config);
        assert_eq!(
            outputs,
            vec![
                (Granularity::Section, PathBuf::from("../vectors/gai/section_vectors.json")),
                (Granularity::Paragraph, PathBuf::from("../vectors/gai/paragraph_vectors.json")),
            ]
        );
    }

    #[test]
    fn recognises_json_corpus_files() {
        assert!(is_corpus_file(Path::new("../corpora/gai/eng/article-1.json")));
        assert!(!is_corpus_file(Path::new("../corpora/gai/eng/notes.md")));
        assert!(!is_corpus_file(Path::new("../corpora/gai/eng")));
    }

    #[test]
    fn granularity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Granularity::Paragraph).unwrap(), "\"paragraph\"");
    }
}
