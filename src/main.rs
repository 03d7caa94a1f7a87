use anyhow::Result;
use jar_class_finder::cli::{USAGE, parse_args};
use jar_class_finder::config::SearchConfig;
use jar_class_finder::error::UsageError;
use jar_class_finder::search::run_search;

fn main() -> Result<()> {
    init_logging();

    let config = match load_config(std::env::args().collect()) {
        Ok(config) => config,
        Err(UsageError::Parse(err)) if !err.use_stderr() => err.exit(),
        Err(err) => print_usage_and_exit(&err),
    };

    let stdout = std::io::stdout();
    run_search(&config, &mut stdout.lock())?;
    Ok(())
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn load_config(args: Vec<String>) -> Result<SearchConfig, UsageError> {
    SearchConfig::from_cli(parse_args(args)?)
}

fn print_usage_and_exit(err: &UsageError) -> ! {
    eprintln!("{err}");
    eprintln!("{USAGE}");
    std::process::exit(1);
}
