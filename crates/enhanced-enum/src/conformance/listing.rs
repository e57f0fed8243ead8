use std::collections::HashSet;

use super::{describe, Category, TestResult};
use crate::EnhancedEnum;

pub(super) fn run_listing_tests<E: EnhancedEnum>() -> Vec<TestResult> {
    let checks: [(&str, fn() -> Result<(), String>); 6] = [
        ("members_non_empty", members_non_empty::<E>),
        ("list_all_matches_slice", list_all_matches_slice::<E>),
        ("listing_is_deterministic", listing_is_deterministic::<E>),
        ("ordinals_follow_declaration_order", ordinals_follow_declaration_order::<E>),
        ("names_are_unique", names_are_unique::<E>),
        ("first_and_last_bracket_members", first_and_last_bracket_members::<E>),
    ];
    checks
        .into_iter()
        .map(|(name, check)| TestResult::from_result(Category::Listing, name, check()))
        .collect()
}

fn members_non_empty<E: EnhancedEnum>() -> Result<(), String> {
    if E::MEMBERS.is_empty() {
        return Err(format!("{} declares no members", E::TYPE_NAME));
    }
    if E::count() != E::MEMBERS.len() {
        return Err(format!(
            "count() = {} but MEMBERS has {}",
            E::count(),
            E::MEMBERS.len()
        ));
    }
    Ok(())
}

fn list_all_matches_slice<E: EnhancedEnum>() -> Result<(), String> {
    let listed = E::list_all();
    if listed.as_slice() != E::as_slice() {
        return Err(format!(
            "list_all() = {:?} but as_slice() = {:?}",
            listed,
            E::as_slice()
        ));
    }
    let iterated: Vec<E> = E::iter().collect();
    if iterated != listed {
        return Err(format!(
            "iter() = {:?} but list_all() = {:?}",
            iterated, listed
        ));
    }
    Ok(())
}

fn listing_is_deterministic<E: EnhancedEnum>() -> Result<(), String> {
    let first = E::list_all();
    for _ in 0..3 {
        let again = E::list_all();
        if again != first {
            return Err(format!("list_all() changed from {:?} to {:?}", first, again));
        }
    }
    Ok(())
}

fn ordinals_follow_declaration_order<E: EnhancedEnum>() -> Result<(), String> {
    for (position, member) in E::iter().enumerate() {
        if member.ordinal() != position {
            return Err(format!(
                "{} reports ordinal {} but is declared at {}",
                describe(member),
                member.ordinal(),
                position
            ));
        }
    }
    Ok(())
}

fn names_are_unique<E: EnhancedEnum>() -> Result<(), String> {
    let mut seen = HashSet::new();
    for member in E::iter() {
        if !seen.insert(member.name()) {
            return Err(format!(
                "name {:?} is used by more than one member",
                member.name()
            ));
        }
    }
    Ok(())
}

fn first_and_last_bracket_members<E: EnhancedEnum>() -> Result<(), String> {
    let members = E::as_slice();
    match (members.first(), members.last()) {
        (Some(&first), Some(&last)) if first == E::first() && last == E::last() => Ok(()),
        (Some(_), Some(_)) => Err(format!(
            "first()/last() = {:?}/{:?} disagree with the member slice",
            E::first(),
            E::last()
        )),
        _ => Err("no members to bracket".to_string()),
    }
}
