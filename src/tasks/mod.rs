//! Batch maintenance jobs over a site's content tree

pub mod archives;
pub mod posts;

pub use archives::{collect_categories, plan_pages, sync_archives, ArchiveOptions, ArchiveReport};
pub use posts::{fix_posts, PostsOptions, PostsReport};
