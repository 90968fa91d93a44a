use crate::model::{CaptureOutcome, HistoryEntry};

pub fn print_outcome(outcome: &CaptureOutcome) {
    let source = if outcome.cached { "cache" } else { "fresh" };
    eprintln!(
        "{:<12} {:>5.1}%  [{}] key={} ({}ms)",
        outcome.prediction.label,
        outcome.prediction.confidence * 100.0,
        source,
        outcome.key,
        outcome.duration_ms
    );
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        eprintln!("no predictions recorded yet");
        return;
    }

    eprintln!("Last {} prediction(s), newest first:", entries.len());
    for e in entries {
        eprintln!(
            "  {}  {:<12} {:>5.1}%",
            e.captured_at,
            e.prediction.label,
            e.prediction.confidence * 100.0
        );
    }
}
