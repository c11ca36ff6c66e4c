mod arg_parser;
mod dashboard_cli;
mod logging;

use arg_parser::{ArgParser, SubCommand};
use dashboard_cli::DashboardCli;

use clap::Parser;
use std::error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn error::Error>> {
    let args = ArgParser::parse();
    logging::register_logger(&args.log);
    let cli = DashboardCli::new();

    match args.sub_command {
        SubCommand::Render { format, input } => {
            let raw = cli.read_input(input.as_deref()).await?;
            for row in cli.render_jobs(&raw, format)? {
                println!("{}", row);
            }
        }
        SubCommand::Classify { status } => {
            println!("{}", cli.classify(&status));
        }
    }

    Ok(())
}
