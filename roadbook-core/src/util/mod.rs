mod format;

pub use self::format::*;
