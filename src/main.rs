use std::io::Write;

use clap::Parser;

use elem_tally::cli::{Cli, Commands};
use elem_tally::commands::{run_config, run_convert, run_count, run_init};

fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Count(args) => run_count(args, &cli),
        Commands::Convert(args) => run_convert(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
