mod cursor;

pub use self::cursor::Cursor;
