//! CLI parsing tests for vm show using the test DSL.

#[cfg(test)]
mod tests {
    use crate::commands::VmShowCmd;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: ["vm", "show"],
        test_name: test_requires_name_or_id,
        required_arg: "--name",
    }

    crate::cli_option_test! {
        command: ["vm", "show"],
        cmd_type: VmShowCmd,
        test_name: test_with_id,
        args: ["--id", "/broken"],
        field: target.id,
        expected: Some("/broken".to_string()),
    }

    crate::cli_option_test! {
        command: ["vm", "show"],
        cmd_type: VmShowCmd,
        test_name: test_with_short_name,
        args: ["-n", "vm1", "-g", "rg"],
        field: target.vm_name,
        expected: Some("vm1".to_string()),
    }

    crate::cli_option_test! {
        command: ["vm", "show"],
        cmd_type: VmShowCmd,
        test_name: test_with_long_resource_group,
        args: ["--name", "vm1", "--resource-group", "rg"],
        field: target.resource_group_name,
        expected: Some("rg".to_string()),
    }

    crate::cli_option_test! {
        command: ["vm", "show"],
        cmd_type: VmShowCmd,
        test_name: test_with_show_details,
        args: ["--name", "vm1", "--show-details"],
        field: show_details,
        expected: true,
    }

    crate::cli_defaults_test! {
        command: ["vm", "show"],
        cmd_type: VmShowCmd,
        required_args: ["--id", "vm1"],
        defaults: {
            show_details: false,
            target.resource_group_name: None,
        },
    }

    crate::cli_error_test! {
        command: ["vm", "show"],
        test_name: test_id_and_name_conflict,
        args: ["--id", "vm1", "--name", "vm2"],
    }
}
