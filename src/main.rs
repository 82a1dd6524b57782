use annostat::cli_main::{Cli, Commands};
use annostat::pipeline;
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    match cli.command {
        Commands::Identity { tracking, query, reference, output } => {
            info!("Computing pairwise identities for: {}", tracking.display());
            let config = Commands::identity_config(tracking, query, reference, output);

            if let Err(e) = pipeline::run_identity(&config) {
                eprintln!("Error during identity computation: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Summarize { work_dir, busco_dir, ref_busco, lineage, run_id, format } => {
            info!("Summarizing runs in: {}", work_dir.display());
            let config = Commands::summarize_config(work_dir, busco_dir, ref_busco, lineage, run_id, format);

            match pipeline::run_summarize(&config) {
                Ok(outcome) => println!("{}", outcome.output.display()),
                Err(e) => {
                    eprintln!("Error during summary: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
