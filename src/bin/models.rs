use grok_cli::api::ApiClient;
use grok_cli::cli::{parse_or_exit, ModelsArgs};
use grok_cli::commands::models;
use grok_cli::config::ApiConfig;
use grok_cli::error::Result;
use grok_cli::ui::report_error;
use std::io;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: ModelsArgs = parse_or_exit();

    if let Err(e) = run(args).await {
        report_error(&e);
        process::exit(1);
    }
}

async fn run(args: ModelsArgs) -> Result<()> {
    let api = ApiConfig::from_args(&args.connection)?;
    let client = ApiClient::new(&api, args.connection.verbose)?;

    let groups = models::fetch(&client).await?;
    groups.render(&mut io::stdout())?;
    Ok(())
}
