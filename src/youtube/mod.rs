mod oembed;
mod tab;
mod video_id;

pub use oembed::{OembedClient, OembedError};
pub use tab::{is_watch_page, resolve_video_url, ActiveTab, FixedTab, ResolveError, TabSource, TAB_URL_ENV};
pub use video_id::{extract_video_id, VideoId, VIDEO_ID_LEN};
