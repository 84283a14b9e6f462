use grok_cli::api::ApiClient;
use grok_cli::cli::{join_words, parse_or_exit, ImagineArgs};
use grok_cli::commands::imagine;
use grok_cli::config::Config;
use grok_cli::error::Result;
use grok_cli::ui::{display_saved_image, report_error};
use std::io;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: ImagineArgs = parse_or_exit();

    if let Err(e) = run(args).await {
        report_error(&e);
        process::exit(1);
    }
}

async fn run(args: ImagineArgs) -> Result<()> {
    let config = Config::from_args(&args.connection, &args.model)?;
    let client = ApiClient::new(&config.api, config.verbose)?;
    let prompt = join_words(&args.prompt);

    let saved = imagine::run(&client, &config.model, &prompt, args.output).await?;
    display_saved_image(&mut io::stdout(), "Image", &saved)?;
    Ok(())
}
