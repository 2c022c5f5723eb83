use crate::html::Dialect;

/// Configuration of a compile.
///
/// # Example
///
/// ```
/// use flash_pug::{Dialect, Settings};
///
/// let settings = Settings {
///     dialect: Dialect::Html,
///     ..Settings::default()
/// };
///
/// assert_eq!(settings.template_extension, ".pug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Included files ending in this are compiled, anything else is copied
    /// verbatim.
    ///
    /// ### Default
    ///
    /// `".pug"`
    pub template_extension: String,

    /// Appended to an input path to form its default output path. Nested
    /// includes are compiled to `<include path><output_suffix>`.
    ///
    /// ### Default
    ///
    /// `".html"`
    pub output_suffix: String,

    /// Dialect the top-level template starts with.
    ///
    /// ### Default
    ///
    /// [`Dialect::Unspecified`]
    pub dialect: Dialect,

    /// Reject include cycles through any number of files rather than only a
    /// template including itself.
    ///
    /// ### Default
    ///
    /// `true`
    pub detect_include_cycles: bool,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Settings {
            template_extension: ".pug".into(),
            output_suffix: ".html".into(),
            dialect: Dialect::Unspecified,
            detect_include_cycles: true,
        }
    }
}

impl Settings {
    /// Default output path for `input`.
    pub fn output_path_for(&self, input: &str) -> String {
        format!("{input}{}", self.output_suffix)
    }

    #[inline]
    pub fn is_template(&self, path: &str) -> bool {
        path.len() > self.template_extension.len() && path.ends_with(&*self.template_extension)
    }
}
