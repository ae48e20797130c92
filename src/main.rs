mod cli;

use cli::commands::Command;
use cli::Caro;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    caro::instrumentation::init_tracing();

    Caro::from_args().execute();

    #[cfg(feature = "instrumentation")]
    caro::instrumentation::print_timing_statistics();
}
