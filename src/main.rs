// src/main.rs

use pipeline_waiter::report::GithubActionsSink;
use pipeline_waiter::{cli, init_logging_or_report, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let mut sink = GithubActionsSink::from_env();
    if !init_logging_or_report(args.log_level, &mut sink) {
        std::process::exit(sink.exit_code());
    }

    std::process::exit(run(args).await);
}
