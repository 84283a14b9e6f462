use crate::config::defaults::{
    ASK_MODEL, CHAT_MODEL, DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_VIDEO_DURATION, EDIT_MODEL,
    IMAGE_MODEL, VIDEO_MODEL,
};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Connection flags shared by every binary.
#[derive(clap::Args, Debug, Clone)]
pub struct ConnectionArgs {
    #[arg(
        long = "base-url",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the grok2api service"
    )]
    pub base_url: String,

    #[arg(
        long = "api-key",
        default_value = DEFAULT_API_KEY,
        hide_default_value = true,
        help = "Bearer token sent with every request"
    )]
    pub api_key: String,

    #[arg(short = 'v', long = "verbose", help = "Print request diagnostics to stderr")]
    pub verbose: bool,
}

impl Default for ConnectionArgs {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            verbose: false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "grok-chat")]
#[command(about = "Chat with Grok and stream the reply", long_about = None)]
pub struct ChatArgs {
    #[arg(long = "model", default_value = CHAT_MODEL, help = "Model to chat with")]
    pub model: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(required = true, help = "Message to send")]
    pub message: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "grok-ask")]
#[command(about = "Ask Grok for up-to-date information", long_about = None)]
pub struct AskArgs {
    #[arg(long = "model", default_value = ASK_MODEL, help = "Model to ask")]
    pub model: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(required = true, help = "Question to ask")]
    pub question: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "grok-imagine")]
#[command(about = "Generate an image from a text prompt", long_about = None)]
pub struct ImagineArgs {
    #[arg(short = 'o', long = "output", help = "Output file (default: derived from the prompt)")]
    pub output: Option<PathBuf>,

    #[arg(long = "model", default_value = IMAGE_MODEL, help = "Image generation model")]
    pub model: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(required = true, help = "Image prompt")]
    pub prompt: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "grok-edit")]
#[command(about = "Edit an existing image with a text prompt", long_about = None)]
pub struct EditArgs {
    #[arg(short = 'o', long = "output", help = "Output file (default: <input>_edited.<ext>)")]
    pub output: Option<PathBuf>,

    #[arg(long = "model", default_value = EDIT_MODEL, help = "Image editing model")]
    pub model: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(help = "Image to edit")]
    pub input: PathBuf,

    #[arg(required = true, help = "Edit instruction")]
    pub prompt: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "grok-video")]
#[command(about = "Generate a video from a text prompt", long_about = None)]
pub struct VideoArgs {
    #[arg(short = 'o', long = "output", help = "Output file (default: derived from the prompt)")]
    pub output: Option<PathBuf>,

    #[arg(
        long = "duration",
        default_value_t = DEFAULT_VIDEO_DURATION,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Video duration in seconds"
    )]
    pub duration: u32,

    #[arg(long = "model", default_value = VIDEO_MODEL, help = "Video generation model")]
    pub model: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(required = true, help = "Video prompt")]
    pub prompt: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "grok-models")]
#[command(about = "List the models offered by the grok2api service", long_about = None)]
pub struct ModelsArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Parse the process arguments, exiting with status 1 on any usage error.
///
/// `--help` and `--version` still exit 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    }
}

/// Multi-word positionals are sent as one space-joined string.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
