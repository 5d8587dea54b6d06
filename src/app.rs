use clap::Parser;
use clap_verbosity_flag::Verbosity;

/// Prints the Fibonacci numbers below 255, restarting from 0 forever
#[derive(Debug, Parser)]
#[clap(version, about)]
pub(crate) struct App {
    #[clap(flatten)]
    pub(crate) verbose: Verbosity,
}

impl App {
    pub(crate) fn new() -> Self {
        Self::parse()
    }
    pub(crate) fn init_logging(&self) {
        pretty_env_logger::formatted_builder()
            .filter_level(self.verbose.log_level_filter())
            .init()
    }
}
