use anyhow::Result;
use tracing::{debug, info};

use vector_job_config::{
    job_config,
    layout::{corpus_dirs, planned_outputs, vector_data_js_path},
    logging::init_logging,
    util::{get_progress_bar, BarStyle},
};

fn main() -> Result<()> {
    let config = job_config();
    init_logging(config.verbose);
    config.validate()?;

    info!(
        "Domain: {} \tLanguages: {} \tModel: {}",
        config.domain,
        config.languages.join(", "),
        config.model_name
    );

    let corpora = corpus_dirs(config);
    let progress_bar = get_progress_bar(corpora.len(), BarStyle::Language, config.show_progress);
    for (lang, dir) in corpora {
        progress_bar.set_message(lang.clone());
        debug!("Corpus [{}]: {}", lang, dir.display());
        progress_bar.inc(1);
    }
    progress_bar.finish_with_message("Corpus layout resolved");

    for (granularity, path) in planned_outputs(config) {
        debug!("Output [{:?}]: {}", granularity, path.display());
    }
    debug!("Visualization data: {}", vector_data_js_path(config).display());

    match config.max_documents {
        Some(cap) => info!("Processing at most {} documents per language", cap),
        None => info!("Processing all documents"),
    }

    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
