//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("graphgen")
        .about("Generate Rust resolvers and serializers from GraphQL schema models")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Emit resolver code for a model.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate resolver code for a schema model")
        .override_usage(
            "\
  graphgen generate <MODEL> [-o <FILE>]
  graphgen generate - < model.json",
        )
        .after_help(
            r#"EXAMPLES:
  graphgen generate model.json                      # print to stdout
  graphgen generate model.json -o src/generated.rs  # write to file
  graphgen generate model.json --no-shims           # routines only
  graphgen generate model.json --resolvers-trait Api"#,
        )
        .arg(model_path_arg())
        .arg(output_arg())
        .arg(resolvers_trait_arg())
        .arg(runtime_crate_arg())
        .arg(no_shims_arg())
}

/// Load and verify a model without emitting.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a schema model")
        .after_help(
            r#"EXAMPLES:
  graphgen check model.json
  graphgen check - < model.json"#,
        )
        .arg(model_path_arg())
}
