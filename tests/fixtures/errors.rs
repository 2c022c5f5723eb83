use crate::harness::{compile_err, TestCompile};
use flash_pug::{compile, CompileError, MemoryFileSystem, Readings, ScanErrorKind};

fn scan_error_kind(source: &str) -> ScanErrorKind {
    compile_err(source)
        .scan_error()
        .map(|err| err.kind.clone())
        .expect("Failure should be a syntax error")
}

#[test]
fn input_must_be_a_file() {
    let fs = MemoryFileSystem::new();
    let err = compile(&fs, &Readings::default(), "/nope.pug", None)
        .expect_err("Missing input should fail");

    assert!(matches!(err, CompileError::NotAFile(ref path) if path == "/nope.pug"));
    assert!(fs.paths().is_empty());
}

#[test]
fn explicit_output_path() {
    let fs = MemoryFileSystem::new();

    fs.insert("/index.pug", "p");

    compile(&fs, &Readings::default(), "/index.pug", Some("/www/index.html"))
        .expect("Template should compile");

    assert_eq!(fs.get_string("/www/index.html").as_deref(), Some("<p></p>"));
    assert_eq!(fs.get("/index.pug.html"), None);
}

#[test]
fn invalid_utf8() {
    let compile = TestCompile::new("");

    compile.fs.insert("/index.pug", vec![b'p', b' ', 0xff]);

    assert!(matches!(
        compile.run(),
        Err(CompileError::InvalidUtf8 { ref path }) if path == "/index.pug"
    ));
}

#[test]
fn syntax_error_kinds() {
    assert_eq!(
        scan_error_kind("div\n  p\n\tspan"),
        ScanErrorKind::WrongIndentationCharacter('\t')
    );
    assert_eq!(
        scan_error_kind("div\n    p\n  span"),
        ScanErrorKind::WrongIndentationAmount
    );
    assert_eq!(scan_error_kind("p%"), ScanErrorKind::UnexpectedCharacter('%'));
    assert_eq!(scan_error_kind("p ]\np]"), ScanErrorKind::UnexpectedCharacter(']'));
    assert_eq!(scan_error_kind("a(href='x"), ScanErrorKind::UnexpectedEndOfSource);
    assert_eq!(
        scan_error_kind("p #{IO_FAN}"),
        ScanErrorKind::UnknownGpio("IO_FAN".into())
    );
    assert_eq!(
        scan_error_kind("if (IO_LED = 4294967296):\n  p"),
        ScanErrorKind::MalformedExpression("4294967296".into())
    );
    assert_eq!(
        scan_error_kind("if True\n  p"),
        ScanErrorKind::MissingGuardTerminator
    );
    assert_eq!(
        scan_error_kind("p #[b bold"),
        ScanErrorKind::UnterminatedInterpolation
    );
}

#[test]
fn malformed_guards_are_syntax_errors() {
    assert_eq!(
        scan_error_kind("else\n  p\nq"),
        ScanErrorKind::MissingGuardTerminator
    );
    assert_eq!(
        scan_error_kind("if True:\n  p\nelse\n  q"),
        ScanErrorKind::MissingGuardTerminator
    );
    assert_eq!(
        scan_error_kind("if\n  p"),
        ScanErrorKind::UnexpectedCharacter('\n')
    );
    assert_eq!(scan_error_kind("div\n  unless"), ScanErrorKind::UnexpectedEndOfSource);
}

#[test]
fn syntax_error_location() {
    let err = compile_err("html\n  body\n    p(class=\"x\" =)");
    let scan_error = err.scan_error().expect("Failure should be a syntax error");

    assert_eq!((scan_error.line, scan_error.column), (3, 17));
    assert!(err.to_string().starts_with("Syntax error in `/index.pug`:"));
}
