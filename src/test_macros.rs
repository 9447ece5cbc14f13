//! Declarative macros for generating CLI parsing tests.
//!
//! This module provides macros to reduce boilerplate in CLI argument parsing tests.
//! Instead of writing repetitive test functions, you can declare the test cases
//! and let the macro generate the actual test code.

/// Generate a test for default values when a command is invoked with minimal args.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        command: [$($word:literal),+],
        cmd_type: $cmd_type:ty,
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($($def_field:ident).+ : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let cmd: $cmd_type = crate::test_utils::parse_leaf(
                &["vm_cli", $($word,)+ $($req_arg),*]
            ).unwrap();
            $(
                assert_eq!(cmd.$($def_field).+, $def_expected,
                    concat!("Default value mismatch for field: ", stringify!($($def_field).+)));
            )*
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: [$($word:literal),+],
        cmd_type: $cmd_type:ty,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $($field:ident).+,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let cmd: $cmd_type = crate::test_utils::parse_leaf(
                &["vm_cli", $($word,)+ $($arg),+]
            ).unwrap();
            assert_eq!(cmd.$($field).+, $expected,
                concat!("Field ", stringify!($($field).+), " mismatch"));
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: ["vm", "nic", "list"],
///     test_name: test_requires_vm_name,
///     required_arg: "--vm-name",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: [$($word:literal),+],
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            use clap::Parser;
            let result = crate::cli::Cli::try_parse_from(["vm_cli", $($word),+]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     command: ["vm", "disk", "attach"],
///     test_name: test_lun_must_be_numeric,
///     args: ["--vm-name", "vm1", "--disk", "d1", "--lun", "first"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        command: [$($word:literal),+],
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            use clap::Parser;
            let result = crate::cli::Cli::try_parse_from([
                "vm_cli",
                $($word,)+
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Resolve Test Macros
// =============================================================================

/// Generate a test that resolves an invocation and compares the namespace as JSON.
///
/// Uses the `resolver_env` fixture from [`crate::test_utils`].
///
/// # Example
/// ```ignore
/// resolve_test! {
///     test_name: test_list_without_group,
///     command: "vm list",
///     args: "",
///     expected: json!({ "resource_group_name": null, "show_details": false }),
/// }
/// ```
#[macro_export]
macro_rules! resolve_test {
    (
        test_name: $test_name:ident,
        command: $cmd:literal,
        args: $args:literal,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name(resolver_env: crate::test_utils::ResolverEnv) {
            let namespace = resolver_env
                .resolve($cmd, $args)
                .expect(concat!("Should resolve: ", $cmd, " ", $args));
            assert_eq!(serde_json::to_value(&namespace).unwrap(), $expected);
        }
    };
}

/// Generate a test that verifies resolution fails with a specific error.
#[macro_export]
macro_rules! resolve_error_test {
    (
        test_name: $test_name:ident,
        command: $cmd:literal,
        args: $args:literal,
        error: $pattern:pat $(,)?
    ) => {
        #[rstest]
        fn $test_name(resolver_env: crate::test_utils::ResolverEnv) {
            let result = resolver_env.resolve($cmd, $args);
            assert!(
                matches!(result, Err($pattern)),
                "Unexpected result: {:?}",
                result
            );
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
///
/// # Example
/// ```ignore
/// output_table_test! {
///     test_name: test_to_table,
///     fixture: show_namespace,
///     fixture_type: VmShowNamespace,
///     expected: SHOW_TABLE,
/// }
/// ```
#[macro_export]
macro_rules! output_table_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: show_namespace,
///     fixture_type: VmShowNamespace,
///     assertions: {
///         "vm_name": "vm1",
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}
