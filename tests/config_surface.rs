use std::{path::PathBuf, thread};

use vector_job_config::{
    job_config,
    layout::{corpus_dirs, planned_outputs},
    Granularity, JobConfiguration,
};

#[test]
fn gai_layout_end_to_end() {
    let config = job_config();
    assert_eq!(config.corpora_dir, "../corpora/gai");
    assert_eq!(config.vectors_dir, "../vectors/gai");

    let langs: Vec<String> = corpus_dirs(config).into_iter().map(|(lang, _)| lang).collect();
    assert_eq!(langs, vec!["eng", "esp"]);

    let outputs = planned_outputs(config);
    assert_eq!(outputs.len(), 3);
    assert_eq!(outputs[0], (Granularity::Document, PathBuf::from("../vectors/gai/document_vectors.json")));
    assert_eq!(outputs[2], (Granularity::Paragraph, PathBuf::from("../vectors/gai/paragraph_vectors.json")));
}

#[test]
fn shared_across_threads_without_locking() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| job_config() as *const JobConfiguration as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.iter().all(|a| *a == addrs[0]));
    assert_eq!(addrs[0], job_config() as *const JobConfiguration as usize);
}

#[test]
fn testing_profile_caps_documents() {
    let config = JobConfiguration::for_domain("immigration")
        .with_max_documents(Some(3))
        .with_show_progress(false)
        .with_verbose(false);
    assert!(config.validate().is_ok());
    assert_eq!(config.corpora_dir, "../corpora/immigration");
    assert_eq!(config.document_limit(10), 3);
    assert_eq!(config.model_name, job_config().model_name);
}

#[test]
fn serialized_config_keeps_derived_directories() {
    let value = serde_json::to_value(job_config()).unwrap();
    assert_eq!(value["domain"], "gai");
    assert_eq!(value["corpora_dir"], "../corpora/gai");
    assert_eq!(value["vectors_dir"], "../vectors/gai");
}

#[test]
fn renamed_domain_without_rederiving_fails_validation() {
    let mut config = job_config().clone();
    config.domain = "climate".to_string();
    assert!(config.validate().is_err());
    assert!(JobConfiguration::for_domain("climate").validate().is_ok());
}
