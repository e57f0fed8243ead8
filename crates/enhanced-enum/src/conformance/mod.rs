//! Conformance suite for `EnhancedEnum` implementations.
//!
//! Checks any implementation (generated by `enhanced_enum!` or written by
//! hand) against the behaviour every enumeration must show:
//!
//! - **Listing**: non-empty, deterministic, declaration-ordered, unique names
//! - **Display**: the display string is exactly the member name
//! - **Navigation**: cyclic `next` / `previous` closure and wraparound
//! - **Lookup**: name and value round-trips, exact matching, `NotFound` keys
//! - **Validate**: agreement between `validate`, `from_value` and the index
//!
//! # Usage
//!
//! ```ignore
//! use enhanced_enum::conformance::run_conformance_suite;
//!
//! #[test]
//! fn color_conformance() {
//!     let report = run_conformance_suite::<Color>();
//!     assert!(report.failed == 0, "{report}");
//! }
//! ```
//!
//! or generate one test per category with
//! [`enum_conformance_tests!`](crate::enum_conformance_tests).

mod display;
mod listing;
mod lookup;
mod navigation;
mod validate;

use std::fmt;

use crate::EnhancedEnum;

crate::enhanced_enum! {
    /// A group of related conformance checks.
    pub enum Category: &'static str {
        Listing = "listing",
        Display = "display",
        Navigation = "navigation",
        Lookup = "lookup",
        Validate = "validate",
    }
}

/// Result of a single conformance check.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Check category (e.g. "listing", "lookup").
    pub category: String,
    /// Check name (e.g. "next_then_previous_is_identity").
    pub name: String,
    pub passed: bool,
    /// Failure detail if the check failed.
    pub message: Option<String>,
}

impl TestResult {
    fn pass(category: Category, name: &str) -> Self {
        Self {
            category: category.value().to_string(),
            name: name.to_string(),
            passed: true,
            message: None,
        }
    }

    fn fail(category: Category, name: &str, msg: String) -> Self {
        Self {
            category: category.value().to_string(),
            name: name.to_string(),
            passed: false,
            message: Some(msg),
        }
    }

    fn from_result(category: Category, name: &str, result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::pass(category, name),
            Err(msg) => Self::fail(category, name, msg),
        }
    }
}

/// Aggregated report from a conformance run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    /// Type the suite ran against.
    pub type_name: &'static str,
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl ConformanceReport {
    fn from_results(type_name: &'static str, results: Vec<TestResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let total = results.len();
        Self {
            type_name,
            results,
            passed,
            failed: total - passed,
            total,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conformance of {}: {}/{} passed ({} failed)",
            self.type_name, self.passed, self.total, self.failed
        )?;
        for r in self.failures() {
            writeln!(
                f,
                "  FAIL [{}/{}]: {}",
                r.category,
                r.name,
                r.message.as_deref().unwrap_or("(no message)")
            )?;
        }
        Ok(())
    }
}

/// Run every conformance category against `E`.
pub fn run_conformance_suite<E: EnhancedEnum>() -> ConformanceReport {
    let results = Category::iter().flat_map(run_checks::<E>).collect();
    let report = ConformanceReport::from_results(E::TYPE_NAME, results);
    tracing::debug!(
        type_name = E::TYPE_NAME,
        passed = report.passed,
        failed = report.failed,
        "conformance suite finished"
    );
    report
}

/// Run a single conformance category against `E`.
pub fn run_category<E: EnhancedEnum>(category: Category) -> ConformanceReport {
    ConformanceReport::from_results(E::TYPE_NAME, run_checks::<E>(category))
}

fn run_checks<E: EnhancedEnum>(category: Category) -> Vec<TestResult> {
    match category {
        Category::Listing => listing::run_listing_tests::<E>(),
        Category::Display => display::run_display_tests::<E>(),
        Category::Navigation => navigation::run_navigation_tests::<E>(),
        Category::Lookup => lookup::run_lookup_tests::<E>(),
        Category::Validate => validate::run_validate_tests::<E>(),
    }
}

fn describe<E: EnhancedEnum>(member: E) -> String {
    format!("{}::{} (#{})", E::TYPE_NAME, member.name(), member.ordinal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_passes_on_its_own_category_type() {
        let report = run_conformance_suite::<Category>();
        assert_eq!(report.failed, 0, "{report}");
        assert_eq!(report.type_name, "Category");
        assert!(report.total >= Category::count());
    }

    #[test]
    fn test_report_display_lists_failures() {
        let report = ConformanceReport::from_results(
            "Broken",
            vec![
                TestResult::pass(Category::Listing, "non_empty"),
                TestResult::fail(Category::Navigation, "wraparound", "went nowhere".into()),
            ],
        );
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        let text = report.to_string();
        assert!(text.contains("Conformance of Broken: 1/2 passed (1 failed)"));
        assert!(text.contains("FAIL [navigation/wraparound]: went nowhere"));
        assert!(!text.contains("non_empty"));
    }

    #[test]
    fn test_category_values_are_lowercase_names() {
        for category in Category::iter() {
            assert_eq!(category.value(), category.name().to_lowercase());
        }
    }
}
