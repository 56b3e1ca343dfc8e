//! Terminal feedback for commands that change a profile or a target

use console::{StyledObject, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

fn status_line(marker: StyledObject<&str>, msg: StyledObject<&str>) {
    println!("  {marker}  {msg}");
}

/// Report a completed change
pub fn print_success(msg: &str) {
    status_line(style("✓").green().bold(), style(msg).green());
}

/// Report a step that was skipped
pub fn print_warning(msg: &str) {
    status_line(style("!").yellow().bold(), style(msg).yellow());
}

/// Spinner shown while the installation target is being modified
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_message(msg.into());
    if let Ok(template) = ProgressStyle::with_template("  {spinner:.cyan}  {msg}") {
        pb.set_style(template.tick_strings(&SPINNER_FRAMES));
    }
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Replace the spinner with a success line
pub fn done_spinner(pb: &ProgressBar, msg: &str) {
    pb.finish_and_clear();
    print_success(msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_carries_message_until_done() {
        let pb = spinner("Applying network configuration");
        assert_eq!(pb.message(), "Applying network configuration");
        assert!(!pb.is_finished());

        done_spinner(&pb, "Network configured");
        assert!(pb.is_finished());
    }
}
