use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_CHARS: &str = "█▓░";

/// Progress bar over a known number of logical items (frames, rows, …) with
/// a consistent style. Used by the export paths only; the layout loops do no
/// I/O.
pub fn count_progress_bar(label: impl Into<String>, unit_label: &str, total_items: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_items);
    let template = format!(
        "{{prefix:.bold.dim}} {{spinner:.green}} [{{elapsed_precise}}] {{wide_bar:.cyan/blue}} {{pos}}/{{len}} {unit_label} {{msg}}",
    );
    pb.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars(BAR_CHARS),
    );
    pb.set_prefix(label.into());
    pb.enable_steady_tick(Duration::from_millis(75));
    pb
}
