//! Result reporting: output lines and the aggregate run status.

use std::io::{self, Write};
use std::net::Ipv4Addr;

use crate::update::UpdateResult;

/// How much the reporter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only `[FAIL]` lines
    Quiet,
    /// One line per host
    #[default]
    Normal,
    /// Per-host lines plus the detected IP
    Verbose,
}

impl Verbosity {
    /// Derives verbosity from the CLI flags; `quiet` wins over `verbose`.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }
}

/// Aggregate outcome of a run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every update succeeded (exit code 0).
    Success,
    /// At least one update failed (exit code 1).
    UpdateFailed,
    /// Configuration or IP determination failed before any update (exit code 2).
    Aborted,
}

impl RunStatus {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::UpdateFailed => 1,
            Self::Aborted => 2,
        }
    }

    /// Status for a set of update results.
    ///
    /// An empty set counts as success.
    #[must_use]
    pub fn from_results(results: &[UpdateResult]) -> Self {
        if results.iter().all(|r| r.success) {
            Self::Success
        } else {
            Self::UpdateFailed
        }
    }
}

impl From<RunStatus> for std::process::ExitCode {
    fn from(status: RunStatus) -> Self {
        Self::from(status.code())
    }
}

/// Formats the output line for one result.
#[must_use]
pub fn format_result(result: &UpdateResult) -> String {
    let tag = if result.success { "OK" } else { "FAIL" };
    format!(
        "[{tag}] host={} ip={} http={} body={}",
        result.host, result.ip, result.http_status, result.body
    )
}

/// Writes the result lines and returns the run status.
///
/// `detected_ip` is `Some` only when the address was auto-detected; it is
/// announced first in verbose mode. `[FAIL]` lines are written at every
/// verbosity.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report<W: Write>(
    out: &mut W,
    results: &[UpdateResult],
    verbosity: Verbosity,
    detected_ip: Option<Ipv4Addr>,
) -> io::Result<RunStatus> {
    if let (Verbosity::Verbose, Some(ip)) = (verbosity, detected_ip) {
        writeln!(out, "Detected public IP: {ip}")?;
    }

    for result in results {
        if result.success && verbosity == Verbosity::Quiet {
            continue;
        }
        writeln!(out, "{}", format_result(result))?;
    }

    Ok(RunStatus::from_results(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(host: &str) -> UpdateResult {
        UpdateResult::new(host, "203.0.113.42", 200, "OK", true)
    }

    fn failed(host: &str) -> UpdateResult {
        UpdateResult::new(host, "203.0.113.42", 401, "Unauthorized", false)
    }

    fn render(
        results: &[UpdateResult],
        verbosity: Verbosity,
        detected: Option<Ipv4Addr>,
    ) -> (String, RunStatus) {
        let mut out = Vec::new();
        let status = report(&mut out, results, verbosity, detected).unwrap();
        (String::from_utf8(out).unwrap(), status)
    }

    mod lines {
        use super::*;

        #[test]
        fn ok_line_format() {
            assert_eq!(
                format_result(&ok("a.example.com")),
                "[OK] host=a.example.com ip=203.0.113.42 http=200 body=OK"
            );
        }

        #[test]
        fn fail_line_format() {
            assert_eq!(
                format_result(&failed("b.example.com")),
                "[FAIL] host=b.example.com ip=203.0.113.42 http=401 body=Unauthorized"
            );
        }

        #[test]
        fn normal_mode_prints_every_result_in_order() {
            let (output, _) = render(
                &[ok("a.example.com"), failed("b.example.com")],
                Verbosity::Normal,
                None,
            );

            let lines: Vec<&str> = output.lines().collect();
            assert_eq!(lines.len(), 2);
            assert!(lines[0].starts_with("[OK] host=a.example.com"));
            assert!(lines[1].starts_with("[FAIL] host=b.example.com"));
        }

        #[test]
        fn quiet_mode_suppresses_ok_but_keeps_fail() {
            let (output, _) = render(
                &[ok("a.example.com"), failed("b.example.com")],
                Verbosity::Quiet,
                Some(Ipv4Addr::new(203, 0, 113, 42)),
            );

            assert_eq!(
                output,
                "[FAIL] host=b.example.com ip=203.0.113.42 http=401 body=Unauthorized\n"
            );
        }

        #[test]
        fn verbose_mode_announces_detected_ip_first() {
            let (output, _) = render(
                &[ok("a.example.com")],
                Verbosity::Verbose,
                Some(Ipv4Addr::new(203, 0, 113, 42)),
            );

            let lines: Vec<&str> = output.lines().collect();
            assert_eq!(lines[0], "Detected public IP: 203.0.113.42");
            assert!(lines[1].starts_with("[OK]"));
        }

        #[test]
        fn verbose_mode_without_detection_has_no_ip_line() {
            let (output, _) = render(&[ok("a.example.com")], Verbosity::Verbose, None);

            assert!(!output.contains("Detected public IP"));
            assert_eq!(output.lines().count(), 1);
        }

        #[test]
        fn normal_mode_never_announces_detected_ip() {
            let (output, _) = render(
                &[ok("a.example.com")],
                Verbosity::Normal,
                Some(Ipv4Addr::new(203, 0, 113, 42)),
            );

            assert!(!output.contains("Detected public IP"));
        }
    }

    mod status {
        use super::*;

        #[test]
        fn all_successful_is_success() {
            let (_, status) = render(
                &[ok("a.example.com"), ok("b.example.com")],
                Verbosity::Normal,
                None,
            );

            assert_eq!(status, RunStatus::Success);
            assert_eq!(status.code(), 0);
        }

        #[test]
        fn any_failure_is_update_failed() {
            let (_, status) = render(
                &[ok("a.example.com"), failed("b.example.com")],
                Verbosity::Quiet,
                None,
            );

            assert_eq!(status, RunStatus::UpdateFailed);
            assert_eq!(status.code(), 1);
        }

        #[test]
        fn empty_results_are_success() {
            assert_eq!(RunStatus::from_results(&[]), RunStatus::Success);
        }

        #[test]
        fn aborted_is_exit_code_two() {
            assert_eq!(RunStatus::Aborted.code(), 2);
        }
    }

    mod verbosity {
        use super::*;

        #[test]
        fn flags_map_to_verbosity() {
            assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
            assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        }
    }
}
