//! Console adapter: applies a [`UiState`] to the terminal.

use super::state::UiState;

const BAR_WIDTH: usize = 20;
const EVENTS_SHOWN: usize = 5;

/// Print the current display state.
///
/// Display is last-write-wins: each call repaints every row from the given
/// state and nothing is retained between calls.
pub fn render(state: &UiState) {
    println!();
    for row in &state.rows {
        println!(
            "{:<12} [{}] {:>3}% {}",
            row.category.to_string(),
            bar(row.percent),
            row.percent,
            row.label
        );
    }

    for event in state.events.iter().take(EVENTS_SHOWN) {
        println!(
            "  #{:<4} {} {:<12} {} {} {}",
            event.seq, event.time, event.event_name, event.code, event.kind, event.severity
        );
    }
}

/// Fixed-width bar for a 0-100 percentage. Out-of-range scores are clamped
/// for display only; the underlying value is shown as-is next to the bar.
fn bar(percent: i32) -> String {
    let filled = (percent.clamp(0, 100) as usize) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
