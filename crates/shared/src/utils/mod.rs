mod format_datetime;
mod gracefull;
mod logs;

pub use self::format_datetime::format_author_created_at;
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
