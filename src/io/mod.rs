//! Collaborators the compiler consumes: the filesystem it reads templates
//! from and writes output to, and the hardware whose readings are snapshotted
//! into the output.

mod fs;
mod hardware;

pub use self::fs::{FileSystem, MemoryFileSystem};
pub use self::hardware::{GpioPin, Hardware, Readings};

cfg_if::cfg_if! {
    if #[cfg(feature = "std-fs")] {
        pub use self::fs::StdFileSystem;
    }
}
