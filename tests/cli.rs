//! End-to-end tests for the vm_cli binary: exit statuses and rendered output.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VM_ID: &str = "/subscriptions/00000000-0000-0000-0000-0123456789abc/resourceGroups/thisisaresourcegroup/providers/Microsoft.Compute/virtualMachines/thisisavmname";

/// Run the binary from an empty directory so no stray config is picked up.
#[allow(deprecated)]
fn vm_cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vm_cli").expect("Failed to find vm_cli binary");
    cmd.current_dir(dir.path()).env_remove("VM_CLI_LOG");
    cmd
}

fn empty_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn configured_dir(config: &str) -> TempDir {
    let dir = empty_dir();
    std::fs::write(dir.path().join(".vm_cli.json"), config).expect("Failed to write config");
    dir
}

#[test]
fn test_show_by_id_prints_namespace() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "show", "--id", VM_ID, "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resource_group_name\": \"thisisaresourcegroup\""))
        .stdout(predicate::str::contains("\"vm_name\": \"thisisavmname\""))
        .stdout(predicate::str::contains("\"show_details\": false"));
}

#[test]
fn test_show_broken_id_exits_with_usage_error() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "show", "--id", "/broken"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("resource group"));
}

#[test]
fn test_show_plain_name_uses_configured_group() {
    let dir = configured_dir(r#"{ "defaults": { "resource_group": "configured" } }"#);
    vm_cli(&dir)
        .args(["vm", "show", "--id", "vm1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configured"));
}

#[test]
fn test_list_without_group_succeeds() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("vm list"));
}

#[test]
fn test_unknown_command_fails() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["network", "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a known command"));
}

#[test]
fn test_malformed_value_fails() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "disk", "attach", "-g", "rg", "--vm-name", "vm1", "--disk", "d1", "--lun", "first"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_empty_resource_group_fails() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "show", "-n", "vm1", "-g", ""])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_nic_reference_fails() {
    let dir = configured_dir(r#"{ "subscription_id": "00000000-0000-0000-0000-000000000000" }"#);
    vm_cli(&dir)
        .args(["vm", "create", "-g", "rg", "-n", "vm1", "--image", "Ubuntu2204", "--nics", ""])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_required_argument_fails() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "nic", "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--vm-name"));
}

#[test]
fn test_create_with_short_nics_needs_subscription() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "create", "-g", "rg", "-n", "vm1", "--image", "Ubuntu2204", "--nics", "nic1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("subscription"));
}

#[test]
fn test_create_with_configured_subscription() {
    let dir = configured_dir(r#"{ "subscription_id": "00000000-0000-0000-0000-000000000000" }"#);
    vm_cli(&dir)
        .args(["vm", "create", "-g", "rg", "-n", "vm1", "--image", "Ubuntu2204", "--nics", "nic1", "nic2", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg/providers/Microsoft.Network/networkInterfaces/nic1",
        ))
        .stdout(predicate::str::contains("\"primary\": true"))
        .stdout(predicate::str::contains("\"primary\": false"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = configured_dir("{ not json");
    vm_cli(&dir)
        .args(["vm", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn test_help_succeeds() {
    let dir = empty_dir();
    vm_cli(&dir)
        .args(["vm", "show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--resource-group"));
}

#[test]
fn test_bare_group_shows_usage() {
    let dir = empty_dir();
    vm_cli(&dir)
        .arg("vm")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}
