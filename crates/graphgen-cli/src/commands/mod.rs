pub mod check;
pub mod generate;
pub mod model_loader;
