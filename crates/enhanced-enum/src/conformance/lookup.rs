use super::{describe, Category, TestResult};
use crate::{EnhancedEnum, EnumError, LookupKey};

pub(super) fn run_lookup_tests<E: EnhancedEnum>() -> Vec<TestResult> {
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        Category::Lookup,
        "from_name_round_trips",
        from_name_round_trips::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Lookup,
        "from_value_returns_first_declared_match",
        from_value_returns_first_declared_match::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Lookup,
        "from_name_is_case_sensitive",
        from_name_is_case_sensitive::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Lookup,
        "from_name_rejects_partial_names",
        from_name_rejects_partial_names::<E>(),
    ));
    results.push(TestResult::from_result(
        Category::Lookup,
        "unknown_name_error_carries_key",
        unknown_name_error_carries_key::<E>(),
    ));

    results
}

/// A name guaranteed not to belong to any member of `E`.
fn unused_name<E: EnhancedEnum>() -> String {
    let mut candidate = String::from("__missing__");
    while E::lookup_name(&candidate).is_some() || E::iter().any(|m| m.name() == candidate) {
        candidate.push('_');
    }
    candidate
}

fn from_name_round_trips<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        match E::from_name(member.name()) {
            Ok(found) if found == member => {}
            Ok(found) => {
                return Err(format!(
                    "from_name({:?}) = {}, expected {}",
                    member.name(),
                    describe(found),
                    describe(member)
                ))
            }
            Err(e) => {
                return Err(format!(
                    "from_name({:?}) failed: {}",
                    member.name(),
                    e
                ))
            }
        }
    }
    Ok(())
}

fn from_value_returns_first_declared_match<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        let expected = E::iter()
            .find(|m| m.value() == member.value())
            .unwrap_or(member);
        match E::from_value(member.value()) {
            Ok(found) if found == expected => {}
            Ok(found) => {
                return Err(format!(
                    "from_value({}) = {}, expected {}",
                    member.value(),
                    describe(found),
                    describe(expected)
                ))
            }
            Err(e) => {
                return Err(format!(
                    "from_value({}) failed: {}",
                    member.value(),
                    e
                ))
            }
        }
    }
    Ok(())
}

fn from_name_is_case_sensitive<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        for variant in [member.name().to_lowercase(), member.name().to_uppercase()] {
            let declared = E::iter().find(|m| m.name() == variant);
            let found = E::from_name(&variant).ok();
            if found != declared {
                return Err(format!(
                    "from_name({:?}) = {:?}, expected {:?}",
                    variant, found, declared
                ));
            }
        }
    }
    Ok(())
}

fn from_name_rejects_partial_names<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        let name = member.name();
        let Some((last_index, _)) = name.char_indices().last() else {
            continue;
        };
        let prefix = &name[..last_index];
        let padded = format!(" {name} ");
        for probe in [prefix, padded.as_str()] {
            let declared = E::iter().find(|m| m.name() == probe);
            let found = E::from_name(probe).ok();
            if found != declared {
                return Err(format!(
                    "from_name({:?}) = {:?}, expected {:?}",
                    probe, found, declared
                ));
            }
        }
    }
    Ok(())
}

fn unknown_name_error_carries_key<E: EnhancedEnum>() -> Result<(), String> {
    let missing = unused_name::<E>();
    match E::from_name(&missing) {
        Ok(found) => Err(format!(
            "from_name({:?}) unexpectedly returned {}",
            missing,
            describe(found)
        )),
        Err(EnumError::NotFound { type_name, key }) => {
            if type_name != E::TYPE_NAME {
                return Err(format!(
                    "NotFound names type {:?}, expected {:?}",
                    type_name,
                    E::TYPE_NAME
                ));
            }
            if key != LookupKey::Name(missing.clone()) {
                return Err(format!("NotFound key = {:?}, expected Name({:?})", key, missing));
            }
            Ok(())
        }
    }
}
