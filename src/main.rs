use std::process::ExitCode;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use pixie::presets;

#[derive(Parser, Debug)]
#[command(name = "pixie")]
#[command(about = "Pixel-art particle emitter demos", long_about = None)]
#[command(version)]
struct Cli {
    /// Demo to run
    #[arg(default_value = "smoke", value_parser = PossibleValuesParser::new(presets::NAMES))]
    demo: String,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }

    let Some(demo) = presets::by_name(&cli.demo) else {
        log::error!("no preset named '{}'", cli.demo);
        return ExitCode::FAILURE;
    };
    match pixie::window::run(&cli.demo, demo) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
