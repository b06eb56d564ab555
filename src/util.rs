use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use once_cell::sync::Lazy;

static MULTI_PROGRESS: Lazy<MultiProgress> = Lazy::new(MultiProgress::new);

/// Colour scheme of a bar, one per level the job reports progress at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    Job,
    Document,
    Language,
}

impl BarStyle {
    fn template(self) -> &'static str {
        match self {
            BarStyle::Job => "[{elapsed_precise}] {bar:40.green/blue} {pos:>7}/{len:7} {msg}",
            BarStyle::Document => "[{elapsed_precise}] {bar:40.red/blue} {pos:>7}/{len:7} {msg}",
            BarStyle::Language => "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
        }
    }
}

/// Progress bar for `len` steps, stacked with any other bars the job has open.
///
/// When `show_progress` is off the bar still counts but never draws.
pub fn get_progress_bar(len: usize, style: BarStyle, show_progress: bool) -> ProgressBar {
    let progress_bar = ProgressBar::new(len as u64);
    if !show_progress {
        progress_bar.set_draw_target(ProgressDrawTarget::hidden());
        return progress_bar;
    }

    progress_bar.set_style(
        ProgressStyle::with_template(style.template())
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );

    MULTI_PROGRESS.add(progress_bar)
}

/// Cuts `text` down to at most `max_chars` characters.
pub fn truncate_text(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
