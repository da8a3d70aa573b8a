use std::path::PathBuf;
use std::{env, fs};

use graphgen_compiler::{Config, emit};
use graphgen_core::Model;

/// Fixture model -> generated file name under `OUT_DIR`.
const FIXTURES: &[(&str, &str)] = &[
    ("fixtures/todo.json", "generated.rs"),
    ("fixtures/broken_schema.json", "broken_schema.rs"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    for (fixture, output) in FIXTURES {
        println!("cargo::rerun-if-changed={fixture}");

        let model = Model::from_json(&fs::read_to_string(fixture)?)?;
        let code = emit(&model, &Config::new())?;
        fs::write(out_dir.join(output), code)?;
    }
    Ok(())
}
