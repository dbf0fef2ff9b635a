//! Sequential fixture execution.

use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use trapkit_core::config::TRAP_CHANNEL_ENV;
use trapkit_core::{TrapChannel, Verdict};

use crate::fixtures::FixtureSpec;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Verdict name recorded when a fixture could not be started.
pub const NOT_RUN: &str = "not_run";
/// Verdict name recorded when a fixture was killed at its deadline.
pub const TIMEOUT: &str = "timeout";

/// Wall-clock budget per fixture unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Runs fixtures one after another and decodes their exit status.
pub struct FixtureRunner {
    /// Name of the run, used as the trace id prefix.
    pub run_id: String,
    /// Trap channel forced on every fixture; `None` inherits the environment.
    pub channel: Option<TrapChannel>,
    /// A fixture still running after this long is killed.
    pub timeout: Duration,
}

impl FixtureRunner {
    /// Create a new runner with [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn new(run_id: impl Into<String>, channel: Option<TrapChannel>) -> Self {
        Self {
            run_id: run_id.into(),
            channel,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Channel label for logs and reports.
    #[must_use]
    pub fn channel_label(&self) -> &'static str {
        self.channel.map_or("inherited", TrapChannel::as_env_value)
    }

    /// Run all fixtures in order and return one result per fixture.
    pub fn run(
        &self,
        fixtures: &[FixtureSpec],
        mut log: Option<&mut LogEmitter>,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::with_capacity(fixtures.len());
        for spec in fixtures {
            let result = self.run_one(spec);
            if let Some(emitter) = log.as_deref_mut() {
                emitter.emit_entry(self.log_entry(&result))?;
            }
            results.push(result);
        }
        if let Some(emitter) = log {
            emitter.flush()?;
        }
        Ok(results)
    }

    /// Run a single fixture until it exits or its deadline passes.
    #[must_use]
    pub fn run_one(&self, spec: &FixtureSpec) -> VerificationResult {
        let mut cmd = Command::new(&spec.path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(channel) = self.channel {
            cmd.env(TRAP_CHANNEL_ENV, channel.as_env_value());
        }

        let started = Instant::now();
        let waited = cmd
            .spawn()
            .map_err(|err| format!("failed to spawn: {err}"))
            .and_then(|mut child| {
                wait_with_deadline(&mut child, self.timeout)
                    .map_err(|err| format!("failed to wait: {err}"))
            });
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let mut result = VerificationResult {
            fixture: spec.name.clone(),
            path: spec.path.display().to_string(),
            expected: spec.expect,
            verdict: String::new(),
            detail: String::new(),
            exit_code: None,
            signal: None,
            passed: false,
            duration_ms,
        };
        match waited {
            Ok(Some(status)) => {
                let verdict = Verdict::from_status(status);
                result.verdict = verdict.as_str().to_string();
                result.detail = verdict.to_string();
                result.exit_code = status.code();
                result.signal = signal_of(status);
                result.passed = spec.expect.matches(verdict);
            }
            Ok(None) => {
                result.verdict = TIMEOUT.to_string();
                result.detail = format!("killed after {} ms", self.timeout.as_millis());
            }
            Err(detail) => {
                result.verdict = NOT_RUN.to_string();
                result.detail = detail;
            }
        }
        result
    }

    fn log_entry(&self, result: &VerificationResult) -> LogEntry {
        let (level, outcome) = match (result.passed, result.verdict.as_str()) {
            (true, _) => (LogLevel::Info, Outcome::Pass),
            (false, NOT_RUN) => (LogLevel::Error, Outcome::Error),
            (false, TIMEOUT) => (LogLevel::Error, Outcome::Timeout),
            (false, _) => (LogLevel::Warn, Outcome::Fail),
        };
        LogEntry::new(String::new(), level, "fixture_run")
            .with_fixture(&result.fixture)
            .with_channel(self.channel_label())
            .with_expected(result.expected.as_str())
            .with_verdict(&result.verdict)
            .with_outcome(outcome)
            .with_status(result.exit_code, result.signal)
            .with_duration_ms(result.duration_ms)
            .with_details(serde_json::json!({
                "path": result.path,
                "detail": result.detail,
            }))
    }
}

/// Poll `child` until it exits. At the deadline it is killed and reaped, and
/// `None` is returned.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> std::io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            // The child may exit between try_wait and kill.
            let _ = child.kill();
            child.wait()?;
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(unix)]
fn signal_of(status: std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: std::process::ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Expectation;
    #[cfg(unix)]
    use crate::structured_log::validate_log_line;

    #[cfg(unix)]
    fn script(name: &str, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir = std::env::temp_dir().join(format!("trapkit-runner-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn missing_executable_is_not_run() {
        let runner = FixtureRunner::new("missing", None);
        let spec = FixtureSpec::new("/nonexistent/trapkit-fixture", Expectation::GoodTrap);
        let result = runner.run_one(&spec);
        assert!(!result.passed);
        assert_eq!(result.verdict, NOT_RUN);
        assert!(result.detail.starts_with("failed to spawn"));
        assert_eq!(result.exit_code, None);
    }

    #[test]
    fn channel_label_reflects_override() {
        assert_eq!(FixtureRunner::new("r", None).channel_label(), "inherited");
        assert_eq!(
            FixtureRunner::new("r", Some(TrapChannel::Abort)).channel_label(),
            "abort"
        );
    }

    #[cfg(unix)]
    #[test]
    fn true_and_false_map_to_good_and_bad_trap() {
        let runner = FixtureRunner::new("coreutils", Some(TrapChannel::Exit));
        let results = runner
            .run(
                &[
                    FixtureSpec::new("true", Expectation::GoodTrap),
                    FixtureSpec::new("false", Expectation::BadTrap),
                    FixtureSpec::new("false", Expectation::GoodTrap),
                ],
                None,
            )
            .expect("run without log");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].verdict, "good_trap");
        assert!(results[0].passed);
        assert_eq!(results[1].verdict, "bad_trap");
        assert_eq!(results[1].exit_code, Some(1));
        assert!(results[1].passed);
        assert!(!results[2].passed);
    }

    #[test]
    fn default_timeout_applies_until_overridden() {
        let runner = FixtureRunner::new("r", None);
        assert_eq!(runner.timeout, DEFAULT_TIMEOUT);
        let runner = runner.with_timeout(Duration::from_millis(250));
        assert_eq!(runner.timeout, Duration::from_millis(250));
    }

    #[cfg(unix)]
    #[test]
    fn hung_fixture_is_killed_at_deadline() {
        let path = script("hangs", "exec sleep 20");
        let runner = FixtureRunner::new("deadline", None).with_timeout(Duration::from_millis(200));
        let started = Instant::now();
        let result = runner.run_one(&FixtureSpec::new(&path, Expectation::BadTrap));

        assert!(started.elapsed() < Duration::from_secs(10));
        assert_eq!(result.verdict, TIMEOUT);
        assert!(!result.passed, "a timeout never satisfies an expectation");
        assert_eq!(result.exit_code, None);
        assert_eq!(result.signal, None);
        assert!(result.detail.contains("200 ms"), "{}", result.detail);

        let entry = runner.log_entry(&result);
        assert_eq!(entry.outcome, Some(Outcome::Timeout));
        assert_eq!(entry.level, LogLevel::Error);
        let line = LogEntry { trace_id: "deadline::001".into(), ..entry }
            .to_jsonl()
            .unwrap();
        validate_log_line(&line, 1).expect("timeout entry validates");
    }

    #[cfg(unix)]
    #[test]
    fn sigabrt_fixture_decodes_as_aborted() {
        let path = script("aborts", "kill -ABRT $$");
        let runner = FixtureRunner::new("abort", Some(TrapChannel::Abort));
        let results = runner
            .run(
                &[
                    FixtureSpec::new(&path, Expectation::BadTrap),
                    FixtureSpec::new(&path, Expectation::GoodTrap),
                ],
                None,
            )
            .expect("run without log");

        let trapped = &results[0];
        assert_eq!(trapped.verdict, "aborted");
        assert_eq!(trapped.signal, Some(libc::SIGABRT));
        assert_eq!(trapped.exit_code, None);
        assert!(trapped.passed);
        assert!(!results[1].passed);

        let entry = runner.log_entry(trapped);
        assert_eq!(entry.signal, Some(libc::SIGABRT));
        assert_eq!(entry.channel.as_deref(), Some("abort"));
        assert_eq!(entry.outcome, Some(Outcome::Pass));
        let line = LogEntry { trace_id: "abort::001".into(), ..entry }
            .to_jsonl()
            .unwrap();
        let parsed = validate_log_line(&line, 1).expect("aborted entry validates");
        assert_eq!(parsed.verdict.as_deref(), Some("aborted"));
    }
}
