//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use graphgen_compiler::Config;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub model_path: PathBuf,
    pub output: Option<PathBuf>,
    pub resolvers_trait: Option<String>,
    pub runtime_crate: Option<String>,
    pub no_shims: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            model_path: model_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            resolvers_trait: m.get_one::<String>("resolvers_trait").cloned(),
            runtime_crate: m.get_one::<String>("runtime_crate").cloned(),
            no_shims: m.get_flag("no_shims"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let mut config = Config::new().exec_shims(!p.no_shims);
        if let Some(name) = p.resolvers_trait {
            config = config.resolvers_trait(name);
        }
        if let Some(path) = p.runtime_crate {
            config = config.runtime_crate(path);
        }
        Self {
            model_path: p.model_path,
            output: p.output,
            config,
        }
    }
}

pub struct CheckParams {
    pub model_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            model_path: model_path(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            model_path: p.model_path,
        }
    }
}

/// The positional is required, so clap guarantees it is present.
fn model_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("model_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
