use std::path::PathBuf;

use super::model_loader::load_model;

pub struct CheckArgs {
    pub model_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    let model = match load_model(&args.model_path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = model.verify() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let fields: usize = model.objects.iter().map(|o| o.fields.len()).sum();
    let contract = model.contract_fields().count();
    println!(
        "{}: {} objects, {} fields, {} resolver operations",
        model.package,
        model.objects.len(),
        fields,
        contract
    );
}
