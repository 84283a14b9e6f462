pub mod download;
pub mod images;
pub mod paths;

pub use download::{download_to_file, SavedFile};
pub use images::{decode_base64, resolve_payload, save_image, SavedImage};
pub use paths::{default_output_path, edited_output_path, sanitize_prompt};
