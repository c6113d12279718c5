use clap::Parser;
use summarizer::cli::{execute, Cli, Command};
use summarizer::logging::{init_file_tracing, init_stderr_tracing};
use summarizer::ui::runtime;

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let command = cli.command();
    if command == Command::Form {
        init_file_tracing();
    } else {
        init_stderr_tracing();
    }

    let config = cli.load_config()?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    if command == Command::Form {
        runtime::run(&config, rt.handle().clone())?;
        return Ok(true);
    }

    rt.block_on(execute(command, &config))
}
