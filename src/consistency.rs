//! Table-wide flag consistency.
//!
//! Some arguments appear in many commands. Users learn their spelling once,
//! so every command that exposes one of them must accept exactly the same
//! flags.

use crate::table::CommandTable;

/// Arguments that must be spelled identically everywhere, with their flags.
pub const CONSISTENT_ARGUMENTS: &[(&str, &[&str])] = &[
    ("resource_group_name", &["--resource-group", "-g"]),
    ("virtual_machine_name", &["--vm-name"]),
];

/// An argument whose flags differ from the expected spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub command: String,
    pub argument: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Argument {} of command {} has inconsistent flags: expected {:?}, found {:?}",
            self.argument, self.command, self.expected, self.actual
        )
    }
}

/// Check every command whose name starts with `prefix` against
/// [`CONSISTENT_ARGUMENTS`]. Commands that do not expose an argument are
/// skipped for it.
pub fn check_consistency(table: &CommandTable, prefix: &str) -> Vec<Inconsistency> {
    check_arguments(table, prefix, CONSISTENT_ARGUMENTS)
}

pub fn check_arguments(
    table: &CommandTable,
    prefix: &str,
    expectations: &[(&str, &[&str])],
) -> Vec<Inconsistency> {
    let mut found = Vec::new();

    for command in table.commands() {
        if !command.name().starts_with(prefix) {
            continue;
        }
        for (argument, expected) in expectations {
            let Some(spec) = command.argument(argument) else { continue };
            if spec.options() != *expected {
                found.push(Inconsistency {
                    command: command.name().to_string(),
                    argument: argument.to_string(),
                    expected: expected.iter().map(|flag| flag.to_string()).collect(),
                    actual: spec.options_list,
                });
            }
        }
    }

    found
}
