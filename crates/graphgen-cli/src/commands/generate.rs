use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use graphgen_compiler::{Config, emit};

use super::model_loader::load_model;

pub struct GenerateArgs {
    pub model_path: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Config,
}

pub fn run(args: GenerateArgs) {
    let model = match load_model(&args.model_path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match emit(&model, &args.config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let written = match &args.output {
        Some(path) => fs::write(path, &code)
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e)),
        None => io::stdout()
            .write_all(code.as_bytes())
            .map_err(|e| format!("failed to write stdout: {}", e)),
    };
    if let Err(msg) = written {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}
