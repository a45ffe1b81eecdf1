//! The `mode` command.

use crate::line::{Line, output_message};
use crate::session::Session;

/// Toggle brief/verbose output.
///
/// Arguments are ignored. The returned message uses the prefix of the *new*
/// mode, so switching to verbose is itself announced with the verbose prefix.
pub fn run(session: &mut Session) -> Vec<Line> {
    let mode = if session.toggle_verbose() {
        "verbose"
    } else {
        "brief"
    };
    vec![output_message(
        session.output_prefix(),
        &format!("Switched to {mode} output mode."),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_uses_prefix_after_toggle() {
        let mut session = Session::new();

        assert_eq!(
            run(&mut session),
            [output_message("Output: ", "Switched to verbose output mode.")]
        );
        assert_eq!(
            run(&mut session),
            [output_message("", "Switched to brief output mode.")]
        );
    }
}
