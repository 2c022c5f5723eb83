//! Compiler for an indentation-sensitive, Pug-like template language.
//!
//! Templates are read from and written to a [`FileSystem`]; `IO_*`
//! references are resolved against a [`Hardware`] snapshot at compile time.
//!
//! ```
//! use flash_pug::{compile, GpioPin, MemoryFileSystem, Readings};
//!
//! let fs = MemoryFileSystem::new();
//! let readings = Readings::default().with(GpioPin::Temp, 21);
//!
//! fs.insert("/index.pug", "doctype html\np Temperature: #{IO_TEMP}");
//!
//! compile(&fs, &readings, "/index.pug", None).unwrap();
//!
//! assert_eq!(
//!     fs.get_string("/index.pug.html").unwrap(),
//!     "<!DOCTYPE html><p>Temperature: 21</p>"
//! );
//! ```

#![forbid(unsafe_code)]

mod base;
mod html;
mod io;
mod parser;
mod scanner;
mod settings;
mod token;

pub mod errors;

pub use self::errors::{CompileError, ScanError, ScanErrorKind};
pub use self::html::{escape_attribute_value, is_void_element, Dialect};
pub use self::io::{FileSystem, GpioPin, Hardware, MemoryFileSystem, Readings};
pub use self::parser::{resolve_include_path, CompileContext, Parser};
pub use self::scanner::{Expr, Level, LevelKind, Literal, Scanner};
pub use self::settings::Settings;
pub use self::token::{
    Attribute, AttributeValue, CommentData, DoctypeData, DoctypeShorthand, IncludeData, TagData,
    TextData, TextKind, Token,
};

cfg_if::cfg_if! {
    if #[cfg(feature = "std-fs")] {
        pub use self::io::StdFileSystem;
    }
}

/// Compiles `input` with the default [`Settings`].
///
/// `output` defaults to `input` with `.html` appended.
pub fn compile(
    fs: &dyn FileSystem,
    hardware: &dyn Hardware,
    input: &str,
    output: Option<&str>,
) -> Result<(), CompileError> {
    compile_with_settings(fs, hardware, input, output, &Settings::default())
}

/// Compiles `input`, and every template it includes, into `output`.
///
/// Fails with [`CompileError::NotAFile`] before creating any output if
/// `input` is not a regular file. The first error anywhere in the include
/// tree aborts the whole compile.
pub fn compile_with_settings(
    fs: &dyn FileSystem,
    hardware: &dyn Hardware,
    input: &str,
    output: Option<&str>,
    settings: &Settings,
) -> Result<(), CompileError> {
    if !fs.is_file(input) {
        return Err(CompileError::NotAFile(input.to_owned()));
    }

    let output = output.map_or_else(|| settings.output_path_for(input), str::to_owned);

    let ctx = CompileContext {
        fs,
        hardware,
        settings,
    };

    Parser::new(ctx, input, output, settings.dialect).parse()?;

    Ok(())
}
