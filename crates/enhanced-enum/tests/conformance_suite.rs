use std::fmt;

use enhanced_enum::conformance::{run_category, run_conformance_suite, Category};
use enhanced_enum::{enhanced_enum, enum_conformance_tests, EnhancedEnum};

enhanced_enum! {
    /// Values deliberately out of declaration order.
    enum HttpStatus: u16 {
        NotFound = 404,
        Ok = 200,
        ServerError = 500,
        Created = 201,
    }
}

enhanced_enum! {
    enum Unit: &'static str {
        Only = "only",
    }
}

enhanced_enum! {
    enum Protocol: &'static str {
        Tcp as "tcp" = "TCP",
        Udp as "udp" = "UDP",
        Quic as "quic" = "QUIC",
    }
}

enhanced_enum! {
    enum Severity: i8 {
        Low = -1,
        Normal = 0,
        Default = 0,
        High = 1,
        Routine = -1,
    }
}

enum_conformance_tests!(http_status_conformance: HttpStatus);
enum_conformance_tests!(unit_conformance: Unit);
enum_conformance_tests!(protocol_conformance: Protocol);
enum_conformance_tests!(severity_conformance: Severity);

#[test]
fn declaration_order_not_value_order() {
    assert_eq!(HttpStatus::first(), HttpStatus::NotFound);
    assert_eq!(HttpStatus::NotFound.next(), HttpStatus::Ok);
    assert_eq!(HttpStatus::Created.next(), HttpStatus::NotFound);
    assert_eq!(HttpStatus::from_value(201), Ok(HttpStatus::Created));
    assert!(!HttpStatus::validate(202));
}

#[test]
fn single_member_cycles_to_itself() {
    assert_eq!(Unit::Only.next(), Unit::Only);
    assert_eq!(Unit::Only.previous(), Unit::Only);
    assert_eq!(Unit::Only.cycle().take(3).count(), 3);
    assert_eq!(Unit::from_value("only"), Ok(Unit::Only));
}

#[test]
fn string_values_separate_from_names() {
    assert_eq!(Protocol::Udp.to_string(), "udp");
    assert_eq!(Protocol::Udp.value(), "UDP");
    assert_eq!(Protocol::from_name("quic"), Ok(Protocol::Quic));
    assert!(Protocol::from_name("QUIC").is_err());
    assert_eq!(Protocol::from_value("QUIC"), Ok(Protocol::Quic));
    assert!(Protocol::validate("TCP"));
    assert!(!Protocol::validate("tcp"));
}

#[test]
fn duplicate_values_resolve_to_first_declared() {
    assert_eq!(Severity::from_value(0), Ok(Severity::Normal));
    assert_eq!(Severity::from_value(-1), Ok(Severity::Low));
    assert_eq!(Severity::try_from(0i8), Ok(Severity::Normal));
    // Aliases are still distinct members for navigation and names.
    assert_eq!(Severity::from_name("Default"), Ok(Severity::Default));
    assert_eq!(Severity::Default.previous(), Severity::Normal);
    assert_eq!(Severity::Routine.next(), Severity::Low);
    assert_eq!(Severity::count(), 5);
}

#[test]
fn full_suite_reports_every_category() {
    let report = run_conformance_suite::<HttpStatus>();
    assert_eq!(report.failed, 0, "{report}");
    for category in Category::iter() {
        assert!(
            report.results.iter().any(|r| r.category == category.value()),
            "no results for {category}"
        );
    }
}

// ── Broken hand-written implementations ──────────────────────────────────────

/// Display decorates the name and two members share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Mislabeled {
    First,
    Second,
    Third,
}

impl fmt::Display for Mislabeled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mislabeled.{}", self.name())
    }
}

impl EnhancedEnum for Mislabeled {
    type Value = u32;
    const TYPE_NAME: &'static str = "Mislabeled";
    const MEMBERS: &'static [Self] = &[Mislabeled::First, Mislabeled::Second, Mislabeled::Third];

    fn name(self) -> &'static str {
        match self {
            Mislabeled::First => "First",
            Mislabeled::Second | Mislabeled::Third => "Other",
        }
    }

    fn value(self) -> u32 {
        self as u32
    }
}

/// Ordinal override that disagrees with the member slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Skewed {
    A,
    B,
    C,
}

impl fmt::Display for Skewed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl EnhancedEnum for Skewed {
    type Value = u8;
    const TYPE_NAME: &'static str = "Skewed";
    const MEMBERS: &'static [Self] = &[Skewed::C, Skewed::A, Skewed::B];

    fn name(self) -> &'static str {
        match self {
            Skewed::A => "A",
            Skewed::B => "B",
            Skewed::C => "C",
        }
    }

    fn value(self) -> u8 {
        self as u8
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

#[test]
fn suite_flags_bad_display_and_duplicate_names() {
    let report = run_conformance_suite::<Mislabeled>();
    assert!(report.failed > 0);
    let failed: Vec<&str> = report.failures().map(|r| r.name.as_str()).collect();
    assert!(failed.contains(&"display_is_member_name"), "{report}");
    assert!(failed.contains(&"names_are_unique"), "{report}");
    assert!(report.to_string().contains("FAIL [display/display_is_member_name]"));
}

#[test]
fn suite_flags_ordinals_out_of_declaration_order() {
    let listing = run_category::<Skewed>(Category::Listing);
    assert!(listing
        .failures()
        .any(|r| r.name == "ordinals_follow_declaration_order"));

    let navigation = run_category::<Skewed>(Category::Navigation);
    assert!(navigation.failed > 0, "{navigation}");
}

/// Uninhabited: no members at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Void {}

impl fmt::Display for Void {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl EnhancedEnum for Void {
    type Value = u8;
    const TYPE_NAME: &'static str = "Void";
    const MEMBERS: &'static [Self] = &[];

    fn name(self) -> &'static str {
        match self {}
    }

    fn value(self) -> u8 {
        match self {}
    }
}

#[test]
fn suite_reports_empty_member_set_without_panicking() {
    let report = run_conformance_suite::<Void>();
    assert!(report.failed > 0);
    let failed: Vec<(&str, &str)> = report
        .failures()
        .map(|r| (r.category.as_str(), r.name.as_str()))
        .collect();
    assert!(failed.contains(&("listing", "members_non_empty")), "{report}");
    assert!(failed.contains(&("navigation", "members_non_empty")), "{report}");

    let navigation = run_category::<Void>(Category::Navigation);
    assert_eq!(navigation.total, 1, "{navigation}");
    assert_eq!(navigation.failed, 1, "{navigation}");
}

#[test]
fn empty_member_set_lookups_fail_cleanly() {
    assert!(Void::list_all().is_empty());
    assert!(!Void::validate(0));
    assert!(Void::from_name("anything").is_err());
    assert!(Void::from_value(1).is_err());
}
