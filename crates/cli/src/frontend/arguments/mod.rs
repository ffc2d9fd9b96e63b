mod env;
mod parsed_args;
mod parser;
mod program_name;

#[cfg(test)]
mod tests;

pub(crate) use env::{DIGEST_ENV, env_digest};
pub use parsed_args::ParsedArgs;
pub use parser::parse_args;
pub(crate) use program_name::ProgramName;
