use grok_cli::api::ApiClient;
use grok_cli::cli::{join_words, parse_or_exit, VideoArgs};
use grok_cli::commands::video;
use grok_cli::config::Config;
use grok_cli::error::Result;
use grok_cli::ui::{display_saved_video, report_error};
use std::io;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: VideoArgs = parse_or_exit();

    if let Err(e) = run(args).await {
        report_error(&e);
        process::exit(1);
    }
}

async fn run(args: VideoArgs) -> Result<()> {
    let config = Config::from_args(&args.connection, &args.model)?;
    let client = ApiClient::new(&config.api, config.verbose)?;
    let prompt = join_words(&args.prompt);

    let saved = video::run(&client, &config.model, &prompt, args.duration, args.output).await?;
    display_saved_video(&mut io::stdout(), &saved)?;
    Ok(())
}
