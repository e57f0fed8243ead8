use std::collections::HashSet;

use super::{describe, Category, TestResult};
use crate::{EnhancedEnum, ValueIndex};

pub(super) fn run_validate_tests<E: EnhancedEnum>() -> Vec<TestResult> {
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        Category::Validate,
        "member_values_validate",
        member_values_validate::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Validate,
        "validate_agrees_with_from_value",
        validate_agrees_with_from_value::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Validate,
        "index_covers_exactly_member_values",
        index_covers_exactly_member_values::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Validate,
        "aliases_point_to_earlier_members",
        aliases_point_to_earlier_members::<E>(),
    ));

    results
}

fn member_values_validate<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        if !E::validate(member.value()) {
            return Err(format!(
                "validate({}) is false for {}",
                member.value(),
                describe(member)
            ));
        }
    }
    Ok(())
}

fn validate_agrees_with_from_value<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        let value = member.value();
        let valid = E::validate(value);
        let found = E::from_value(value).is_ok();
        if valid != found {
            return Err(format!(
                "validate({}) = {} but from_value succeeded = {}",
                value, valid, found
            ));
        }
    }
    Ok(())
}

fn index_covers_exactly_member_values<E: EnhancedEnum>() -> Result<(), String> {
    let index = ValueIndex::<E>::build();
    let distinct: HashSet<E::Value> = E::iter().map(|m| m.value()).collect();
    if index.len() != distinct.len() {
        return Err(format!(
            "index holds {} values but members carry {} distinct values",
            index.len(),
            distinct.len()
        ));
    }
    for value in distinct {
        let scanned = E::iter().find(|m| m.value() == value);
        if index.get(value) != scanned || E::lookup_value(value) != scanned {
            return Err(format!(
                "lookup of {} = {:?} (index {:?}), expected {:?}",
                value,
                E::lookup_value(value),
                index.get(value),
                scanned
            ));
        }
    }
    Ok(())
}

fn aliases_point_to_earlier_members<E: EnhancedEnum>() -> Result<(), String> {
    let index = ValueIndex::<E>::build();
    for &(alias, canonical) in index.aliases() {
        if alias.value() != canonical.value() || canonical.ordinal() >= alias.ordinal() {
            return Err(format!(
                "{} is recorded as an alias of {}",
                describe(alias),
                describe(canonical)
            ));
        }
        if E::from_value(alias.value()) != Ok(canonical) {
            return Err(format!(
                "from_value({}) does not resolve alias {} to {}",
                alias.value(),
                describe(alias),
                describe(canonical)
            ));
        }
    }
    Ok(())
}
