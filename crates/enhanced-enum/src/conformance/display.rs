use super::{describe, Category, TestResult};
use crate::EnhancedEnum;

pub(super) fn run_display_tests<E: EnhancedEnum>() -> Vec<TestResult> {
    vec![
        TestResult::from_result(
            Category::Display,
            "display_is_member_name",
            display_is_member_name::<E>(),
        ),
        TestResult::from_result(
            Category::Display,
            "names_follow_declaration_order",
            names_follow_declaration_order::<E>(),
        ),
    ]
}

fn display_is_member_name<E: EnhancedEnum>() -> Result<(), String> {
    for member in E::iter() {
        let shown = member.to_string();
        if shown != member.name() {
            return Err(format!(
                "{} displays as {:?}, expected {:?}",
                describe(member),
                shown,
                member.name()
            ));
        }
    }
    Ok(())
}

fn names_follow_declaration_order<E: EnhancedEnum>() -> Result<(), String> {
    let expected: Vec<&str> = E::iter().map(|m| m.name()).collect();
    let names = E::names();
    if names != expected {
        return Err(format!("names() = {:?}, expected {:?}", names, expected));
    }
    Ok(())
}
