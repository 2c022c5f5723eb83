use flash_pug::{compile_with_settings, CompileError, MemoryFileSystem, Readings, Settings};

mod golden;

pub use self::golden::golden_cases;

pub const INDEX: &str = "/index.pug";

/// Declares one test per `name: pug => html` case, each compiled from a
/// fresh in-memory filesystem with all readings at zero.
macro_rules! html_tests {
    ($($name:ident: $pug:expr => $html:expr;)+) => {
        $(
            #[test]
            fn $name() {
                assert_eq!($crate::harness::compile_str($pug), $html);
            }
        )+
    };
}

/// A compile of `/index.pug` plus any number of extra files.
pub struct TestCompile {
    pub fs: MemoryFileSystem,
    pub readings: Readings,
    pub settings: Settings,
}

impl TestCompile {
    pub fn new(source: &str) -> Self {
        let fs = MemoryFileSystem::new();

        fs.insert(INDEX, source);

        TestCompile {
            fs,
            readings: Readings::default(),
            settings: Settings::default(),
        }
    }

    pub fn file(self, path: &str, content: &str) -> Self {
        self.fs.insert(path, content);
        self
    }

    pub fn readings(mut self, readings: Readings) -> Self {
        self.readings = readings;
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn run(&self) -> Result<String, CompileError> {
        compile_with_settings(&self.fs, &self.readings, INDEX, None, &self.settings)?;

        Ok(self.output(&self.settings.output_path_for(INDEX)))
    }

    pub fn output(&self, path: &str) -> String {
        self.fs
            .get_string(path)
            .unwrap_or_else(|| panic!("`{path}` should have been written"))
    }
}

pub fn compile_str(source: &str) -> String {
    TestCompile::new(source)
        .run()
        .expect("Template should compile")
}

pub fn compile_err(source: &str) -> CompileError {
    TestCompile::new(source)
        .run()
        .expect_err("Template should fail to compile")
}
