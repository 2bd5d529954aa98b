use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Pump is usable but probably not what was meant
    Warning(String),
    /// Pump would be rejected
    Failed(String),
}

/// Overall verdict of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every check passed
    Passed,
    /// No failures, at least one warning
    PassedWithWarnings,
    /// At least one failure
    Failed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Passed => "Check PASSED",
            Verdict::PassedWithWarnings => "Check PASSED with warnings",
            Verdict::Failed => "Check FAILED",
        })
    }
}

/// One check applied to one pump entry
#[derive(Debug, Clone)]
pub struct PumpCheck {
    /// Entry label, e.g. `#2 "1/2 cv"`
    pub subject: String,
    /// What was checked
    pub name: String,
    /// Result
    pub status: CheckStatus,
}

impl PumpCheck {
    pub(crate) fn ok(subject: &str, name: impl Into<String>) -> Self {
        Self::with_status(subject, name, CheckStatus::Ok)
    }

    pub(crate) fn warning(subject: &str, name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_status(subject, name, CheckStatus::Warning(msg.into()))
    }

    pub(crate) fn failed(subject: &str, name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_status(subject, name, CheckStatus::Failed(msg.into()))
    }

    fn with_status(subject: &str, name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            subject: subject.to_string(),
            name: name.into(),
            status,
        }
    }
}

/// Input check report for one pump file
#[derive(Debug)]
pub struct CheckReport {
    /// File (or other source) the pumps came from
    pub source: String,
    /// Number of pump entries examined
    pub pump_count: usize,
    /// Individual results, grouped by entry in file order
    pub checks: Vec<PumpCheck>,
}

impl CheckReport {
    /// Create an empty report for `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pump_count: 0,
            checks: Vec::new(),
        }
    }

    /// Record a check result
    pub fn add_check(&mut self, check: PumpCheck) {
        self.checks.push(check);
    }

    fn count(&self, pred: impl Fn(&CheckStatus) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.status)).count()
    }

    /// Number of passed checks
    pub fn success_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Ok))
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Warning(_)))
    }

    /// Number of failures
    pub fn failure_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed(_)))
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Overall verdict
    pub fn verdict(&self) -> Verdict {
        if self.has_failures() {
            Verdict::Failed
        } else if self.warning_count() > 0 {
            Verdict::PassedWithWarnings
        } else {
            Verdict::Passed
        }
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut out = String::new();
            out.push_str(&format!("{}\n", style("Pump Check Report").bold().cyan()));
            out.push_str(&format!("{}: {}\n", style("Source").bold(), self.source));
            out.push_str(&format!("{}: {}\n", style("Pumps").bold(), self.pump_count));

            let mut subject: Option<&str> = None;
            for check in &self.checks {
                if subject != Some(check.subject.as_str()) {
                    out.push_str(&format!("\n{}\n", style(&check.subject).bold()));
                    subject = Some(&check.subject);
                }
                match &check.status {
                    CheckStatus::Ok => {
                        out.push_str(&format!("  {} {}\n", OK, style(&check.name).green()));
                    }
                    CheckStatus::Warning(msg) => out.push_str(&format!(
                        "  {} {}: {}\n",
                        WARN,
                        style(&check.name).yellow(),
                        msg
                    )),
                    CheckStatus::Failed(msg) => out.push_str(&format!(
                        "  {} {}: {}\n",
                        FAIL,
                        style(&check.name).red(),
                        msg
                    )),
                }
            }

            out.push_str(&format!(
                "\n{}: {} passed, {} warnings, {} failed\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));
            let verdict = self.verdict();
            let styled = match verdict {
                Verdict::Passed => style(verdict.to_string()).green().bold(),
                Verdict::PassedWithWarnings => style(verdict.to_string()).yellow().bold(),
                Verdict::Failed => style(verdict.to_string()).red().bold(),
            };
            out.push_str(&format!("{}\n", styled));
            out
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pump Check Report")?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f, "Pumps: {}", self.pump_count)?;

        let mut subject: Option<&str> = None;
        for check in &self.checks {
            if subject != Some(check.subject.as_str()) {
                writeln!(f)?;
                writeln!(f, "{}", check.subject)?;
                subject = Some(&check.subject);
            }
            match &check.status {
                CheckStatus::Ok => writeln!(f, "  [OK] {}", check.name)?,
                CheckStatus::Warning(msg) => writeln!(f, "  [WARN] {}: {}", check.name, msg)?,
                CheckStatus::Failed(msg) => writeln!(f, "  [FAIL] {}: {}", check.name, msg)?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;
        writeln!(f, "{}", self.verdict())
    }
}
