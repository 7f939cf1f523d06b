mod ids;
mod progress;
mod word;

pub use ids::{ListId, ParseListIdError};
pub use progress::{Progress, RememberedWords};
pub use word::{WordEntry, WordError};
