use grok_cli::api::ApiClient;
use grok_cli::cli::{join_words, parse_or_exit, ChatArgs};
use grok_cli::commands::{chat, ChatMode};
use grok_cli::config::Config;
use grok_cli::error::Result;
use grok_cli::ui::report_error;
use std::io;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: ChatArgs = parse_or_exit();

    if let Err(e) = run(args).await {
        report_error(&e);
        process::exit(1);
    }
}

async fn run(args: ChatArgs) -> Result<()> {
    let config = Config::from_args(&args.connection, &args.model)?;
    let client = ApiClient::new(&config.api, config.verbose)?;
    let message = join_words(&args.message);

    let mut stdout = io::stdout();
    chat::run(&client, ChatMode::Plain, &config.model, &message, &mut stdout).await?;
    Ok(())
}
