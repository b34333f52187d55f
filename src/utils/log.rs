use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// Colored `env_logger` output; `RUST_LOG` still refines individual modules.
    pub fn init(verbosity: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.filter_level(verbosity);
        builder.parse_default_env();
        builder.init();
    }
}
