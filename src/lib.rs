//! vm_cli library - argument resolution for the VM command family
//!
//! Resolves a command name plus raw flags into a typed namespace: resource
//! IDs are decomposed into resource group and name, short resource names are
//! expanded into full IDs, and every failure ends the invocation with a
//! controlled exit.

pub mod cli;
pub mod commands;
pub mod config;
pub mod consistency;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod output;
pub mod resolver;
pub mod resource_id;
pub mod subscription;
pub mod table;
pub mod validators;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
