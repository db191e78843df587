// =============================================================================
// Console rendering
// =============================================================================

use std::io::IsTerminal;

use colored::Colorize;

use crate::runner::{RunReport, Strategy};

/// Respect `NO_COLOR` (https://no-color.org) and explicit opt-out.
/// Returns whether color stays enabled.
pub fn configure_colors(no_color: bool) -> bool {
    let enabled = color_enabled(
        no_color,
        std::env::var_os("NO_COLOR").is_some(),
        std::io::stdout().is_terminal(),
    );
    if !enabled {
        colored::control::set_override(false);
    }
    enabled
}

fn color_enabled(flag: bool, env: bool, terminal: bool) -> bool {
    !flag && !env && terminal
}

/// Header printed before any worker starts.
pub fn banner(strategy: Strategy, workers: usize, total_elements: usize, datasets: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("=== {} ===", strategy.title()).bold()));
    out.push_str(&format!(
        "Number of {}: {} (available cores: {})\n",
        worker_noun(strategy),
        workers,
        num_cpus::get()
    ));
    out.push_str(&format!(
        "Processing {total_elements} elements across {datasets} datasets\n"
    ));
    out
}

/// Results block. Only a successful run reaches this, so the numbers are real.
pub fn results(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=== RESULTS ===".bold()));
    out.push_str(&format!(
        "Global Maximum: {}\n",
        report.global.max().to_string().green()
    ));
    out.push_str(&format!(
        "Global Minimum: {}\n",
        report.global.min().to_string().green()
    ));
    out.push_str(&format!("Range: {}\n", report.global.range()));

    if !report.unprocessed.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            "Not processed (insufficient workers):".yellow(),
            report.unprocessed.join(", ")
        ));
    }
    out
}

/// One-line failure message for stderr.
pub fn failure(err: &dyn std::error::Error) -> String {
    format!("{} {}", "error:".red().bold(), err)
}

fn worker_noun(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::SharedMemory => "threads",
        Strategy::MessagePassing => "processes",
        Strategy::WorkStealing => "pool threads",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::error::ExtremaError;
    use crate::runner::run;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_banner_mentions_model_and_counts() {
        plain();
        let text = banner(Strategy::MessagePassing, 3, 30, 3);
        assert!(text.contains("=== MESSAGE PASSING PROCESSING ==="));
        assert!(text.contains("Number of processes: 3"));
        assert!(text.contains("Processing 30 elements across 3 datasets"));
    }

    #[test]
    fn test_results_block() {
        plain();
        let report = run(&RunConfig::default()).unwrap();
        let text = results(&report);
        assert!(text.contains("Global Maximum: 96"));
        assert!(text.contains("Global Minimum: 15"));
        assert!(text.contains("Range: 81"));
        assert!(!text.contains("Not processed"));
    }

    #[test]
    fn test_results_lists_unprocessed() {
        plain();
        let report = run(&RunConfig::default().with_workers(1)).unwrap();
        let text = results(&report);
        assert!(text.contains("Not processed (insufficient workers): Dataset 2, Dataset 3"));
    }

    #[test]
    fn test_color_needs_a_terminal() {
        assert!(color_enabled(false, false, true));
        assert!(!color_enabled(false, false, false));
        assert!(!color_enabled(true, false, true));
        assert!(!color_enabled(false, true, true));
    }

    #[test]
    fn test_no_color_flag_disables() {
        assert!(!configure_colors(true));
    }

    #[test]
    fn test_failure_line() {
        plain();
        let err = ExtremaError::AllWorkersIdle { workers: 2 };
        let text = failure(&err);
        assert!(text.starts_with("error:"));
        assert!(!text.contains("Global Maximum"));
    }
}
