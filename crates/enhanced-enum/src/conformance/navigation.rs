use super::{describe, Category, TestResult};
use crate::EnhancedEnum;

pub(super) fn run_navigation_tests<E: EnhancedEnum>() -> Vec<TestResult> {
    // next/previous are undefined without members.
    if E::MEMBERS.is_empty() {
        return vec![TestResult::fail(
            Category::Navigation,
            "members_non_empty",
            format!("{} declares no members to navigate", E::TYPE_NAME),
        )];
    }

    let mut results = Vec::new();

    results.push(TestResult::from_result(
        Category::Navigation,
        "next_then_previous_is_identity",
        next_then_previous_is_identity::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Navigation,
        "previous_then_next_is_identity",
        previous_then_next_is_identity::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Navigation,
        "next_follows_declaration_order",
        next_follows_declaration_order::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Navigation,
        "last_next_wraps_to_first",
        last_next_wraps_to_first::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Navigation,
        "first_previous_wraps_to_last",
        first_previous_wraps_to_last::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Navigation,
        "full_cycle_returns_to_start",
        full_cycle_returns_to_start::<E>(),
    ));

    results
}

fn next_then_previous_is_identity<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        let back = member.next().previous();
        if back != member {
            return Err(format!(
                "{}.next().previous() = {}",
                describe(member),
                describe(back)
            ));
        }
    }
    Ok(())
}

fn previous_then_next_is_identity<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        let back = member.previous().next();
        if back != member {
            return Err(format!(
                "{}.previous().next() = {}",
                describe(member),
                describe(back)
            ));
        }
    }
    Ok(())
}

fn next_follows_declaration_order<E: EnhancedEnum>() -> Result<(), String> {
    for pair in E::as_slice().windows(2) {
        let (current, following) = (pair[0], pair[1]);
        if current.next() != following {
            return Err(format!(
                "{}.next() = {}, expected {}",
                describe(current),
                describe(current.next()),
                describe(following)
            ));
        }
        if following.previous() != current {
            return Err(format!(
                "{}.previous() = {}, expected {}",
                describe(following),
                describe(following.previous()),
                describe(current)
            ));
        }
    }
    Ok(())
}

fn last_next_wraps_to_first<E: EnhancedEnum>() -> Result<(), String> {
    let (first, last) = (E::first(), E::last());
    if last.next() != first {
        return Err(format!(
            "{}.next() = {}, expected wrap to {}",
            describe(last),
            describe(last.next()),
            describe(first)
        ));
    }
    Ok(())
}

fn first_previous_wraps_to_last<E: EnhancedEnum>() -> Result<(), String> {
    let (first, last) = (E::first(), E::last());
    if first.previous() != last {
        return Err(format!(
            "{}.previous() = {}, expected wrap to {}",
            describe(first),
            describe(first.previous()),
            describe(last)
        ));
    }
    Ok(())
}

fn full_cycle_returns_to_start<E: EnhancedEnum>() -> Result<(), String> {
    let count = E::count();
    for member in E::iter() {
        if member.nth_next(count) != member || member.nth_previous(count) != member {
            return Err(format!(
                "{} does not return to itself after {} steps",
                describe(member),
                count
            ));
        }
        let visited: Vec<E> = member.cycle().take(count).collect();
        let mut sorted = visited.iter().map(|m| m.ordinal()).collect::<Vec<_>>();
        sorted.sort_unstable();
        if sorted != (0..count).collect::<Vec<_>>() {
            return Err(format!(
                "cycling from {} visits {:?} instead of every member once",
                describe(member),
                visited
            ));
        }
    }
    Ok(())
}
