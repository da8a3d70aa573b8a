mod cli;
mod commands;
mod logging;

use cli::{CheckParams, GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
