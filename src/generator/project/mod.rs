mod format;
mod generate;

pub use format::{format_go_file, GOFMT_BIN_ENV};
pub use generate::{
    generate, load_routes, write_output, GenerateOptions, GenerationReport, DEFAULT_PACKAGE_NAME,
};
