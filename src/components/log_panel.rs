//! Log Panel Component
//!
//! Footer toggle showing the most recent log lines kept by the logger.

use leptos::prelude::*;

const EMPTY_LOG: &str = "No log lines yet";

/// Text shown in the panel, one line per event
fn log_text(lines: &[String]) -> String {
    if lines.is_empty() {
        EMPTY_LOG.to_string()
    } else {
        lines.join("\n")
    }
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (text, set_text) = signal(String::new());

    let toggle = move |_| {
        // Snapshot on open; the buffer is not reactive.
        if !open.get_untracked() {
            set_text.set(log_text(&rolling_logger::recent_lines()));
        }
        set_open.update(|open| *open = !*open);
    };

    view! {
        <div class="log-panel">
            <button class="btn btn-link" on:click=toggle>
                {move || if open.get() { "Hide recent log" } else { "Show recent log" }}
            </button>
            <Show when=move || open.get()>
                <pre class="log-lines">{move || text.get()}</pre>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_text() {
        assert_eq!(log_text(&[]), EMPTY_LOG);
        let lines = vec!["10:00:00.000 INFO signed in".to_string(), "10:00:01.000 WARN x".to_string()];
        assert_eq!(log_text(&lines), "10:00:00.000 INFO signed in\n10:00:01.000 WARN x");
    }
}
