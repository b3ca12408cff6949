pub mod generate;
mod generation_inputs;
pub mod parse;
pub mod preview;
pub mod request_file;

pub use generation_inputs::GenerationInputs;
