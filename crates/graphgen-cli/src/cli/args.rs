//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Model file, or `-` for stdin (positional).
pub fn model_path_arg() -> Arg {
    Arg::new("model_path")
        .value_name("MODEL")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema model JSON file ('-' for stdin)")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write generated code to FILE instead of stdout")
}

/// Resolver contract trait name (--resolvers-trait).
pub fn resolvers_trait_arg() -> Arg {
    Arg::new("resolvers_trait")
        .long("resolvers-trait")
        .value_name("NAME")
        .help("Name of the generated resolver trait [default: Resolvers]")
}

/// Runtime crate path (--runtime-crate).
pub fn runtime_crate_arg() -> Arg {
    Arg::new("runtime_crate")
        .long("runtime-crate")
        .value_name("PATH")
        .help("Path of the runtime crate to import [default: graphgen_runtime]")
}

/// Skip exec entry points (--no-shims).
pub fn no_shims_arg() -> Arg {
    Arg::new("no_shims")
        .long("no-shims")
        .action(ArgAction::SetTrue)
        .help("Do not emit public exec_* entry points for root objects")
}

/// Verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug, -vv for trace)")
}
