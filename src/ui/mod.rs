mod output;

pub use output::{display_saved_image, display_saved_video, log_verbose, report_error, write_error};
