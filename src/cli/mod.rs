pub mod args;

pub use args::{proof_output_path, resolve_size, Args, Command, SizeArg};
