//! Run results and pass policy
//!
//! Suites tolerate a declared amount of partial failure ("5 of 6 steps").
//! The tolerance is an explicit policy attached to each suite result, not
//! a magic number buried in the check.

use colored::*;

/// How many steps of a suite must pass for the suite to count as passed.
#[derive(Debug, Clone, Copy)]
pub struct PassPolicy {
    pub required: u32,
    pub total: u32,
}

impl PassPolicy {
    /// Every step must pass.
    pub fn all(total: u32) -> Self {
        Self { required: total, total }
    }

    /// Deliberate leniency: `required` of `total` steps suffice.
    pub fn at_least(required: u32, total: u32) -> Self {
        Self { required, total }
    }

    pub fn is_met(&self, passed: u32) -> bool {
        passed >= self.required
    }
}

#[derive(Debug)]
pub struct SuiteResult {
    pub name: &'static str,
    pub passed: u32,
    pub policy: PassPolicy,
}

impl SuiteResult {
    pub fn new(name: &'static str, passed: u32, policy: PassPolicy) -> Self {
        Self { name, passed, policy }
    }

    pub fn is_pass(&self) -> bool {
        self.policy.is_met(self.passed)
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub suites: Vec<SuiteResult>,
}

impl RunReport {
    pub fn new(suites: Vec<SuiteResult>) -> Self {
        Self { suites }
    }

    pub fn passed_count(&self) -> usize {
        self.suites.iter().filter(|s| s.is_pass()).count()
    }

    /// The run passes only when every suite meets its own policy.
    pub fn overall_pass(&self) -> bool {
        self.suites.iter().all(SuiteResult::is_pass)
    }

    pub fn print_summary(&self) {
        println!();
        println!("{}", "=".repeat(70).bright_blue());
        println!("{}", "🏁 TEST SUMMARY".bright_blue().bold());
        println!("{}", "=".repeat(70).bright_blue());

        for suite in &self.suites {
            let status = if suite.is_pass() {
                "✅ PASSED".green().to_string()
            } else {
                "❌ FAILED".red().to_string()
            };
            println!(
                "{}: {} ({}/{} steps, {} required)",
                title_case(suite.name),
                status,
                suite.passed,
                suite.policy.total,
                suite.policy.required
            );
        }

        let passed = self.passed_count();
        let total = self.suites.len();
        println!();
        println!("Overall Result: {passed}/{total} suites passed");

        if self.overall_pass() {
            println!("{}", "🎉 ALL SUITES PASSED! Backend API is working correctly.".green().bold());
        } else if passed * 10 >= total * 8 {
            println!("{}", "⚠️ Most suites passed. Minor issues detected.".yellow());
        } else {
            println!("{}", "🚨 Multiple suite failures detected. Backend needs attention.".red().bold());
        }
    }
}

fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_policy_allows_the_declared_slack() {
        let policy = PassPolicy::at_least(5, 6);
        assert!(policy.is_met(6));
        assert!(policy.is_met(5));
        assert!(!policy.is_met(4));
    }

    #[test]
    fn strict_policy_needs_every_step() {
        let policy = PassPolicy::all(3);
        assert!(policy.is_met(3));
        assert!(!policy.is_met(2));
    }

    #[test]
    fn overall_pass_requires_every_suite_policy() {
        let report = RunReport::new(vec![
            SuiteResult::new("api_health", 1, PassPolicy::all(1)),
            SuiteResult::new("vehicle_crud", 5, PassPolicy::at_least(5, 6)),
        ]);
        assert!(report.overall_pass());
        assert_eq!(report.passed_count(), 2);

        let failing = RunReport::new(vec![
            SuiteResult::new("api_health", 0, PassPolicy::all(1)),
            SuiteResult::new("vehicle_crud", 6, PassPolicy::at_least(5, 6)),
        ]);
        assert!(!failing.overall_pass());
        assert_eq!(failing.passed_count(), 1);
    }

    #[test]
    fn suite_names_render_human_readable() {
        assert_eq!(title_case("financial_reports"), "Financial Reports");
        assert_eq!(title_case("api_health"), "Api Health");
    }
}
