use crate::harness::TestCompile;
use flash_pug::errors::OpenMode;
use flash_pug::{CompileError, Settings};

#[test]
fn verbatim_include() {
    let output = TestCompile::new("style\n  include style.css")
        .file("/style.css", "p { color: red }")
        .run()
        .expect("Template should compile");

    assert_eq!(output, "<style>p { color: red }</style>");
}

#[test]
fn template_include_is_compiled_and_read_back() {
    let compile = TestCompile::new("body\n  include partials/nav.pug\n  main")
        .file("/partials/nav.pug", "nav\n  a(href=\"/\") Home");

    let output = compile.run().expect("Template should compile");

    assert_eq!(
        output,
        r#"<body><nav><a href="/">Home</a></nav><main></main></body>"#
    );
    assert_eq!(
        compile.output("/partials/nav.pug.html"),
        r#"<nav><a href="/">Home</a></nav>"#
    );
}

#[test]
fn relative_includes_resolve_against_the_including_file() {
    let output = TestCompile::new("include parts/outer.pug")
        .file("/parts/outer.pug", "div\n  include inner.pug")
        .file("/parts/inner.pug", "span inner")
        .run()
        .expect("Template should compile");

    assert_eq!(output, "<div><span>inner</span></div>");
}

#[test]
fn absolute_include() {
    let output = TestCompile::new("include /shared/footer.pug")
        .file("/shared/footer.pug", "footer")
        .run()
        .expect("Template should compile");

    assert_eq!(output, "<footer></footer>");
}

#[test]
fn nested_template_inherits_dialect() {
    let output = TestCompile::new("doctype html\ninclude form.pug")
        .file("/form.pug", "input(disabled)")
        .run()
        .expect("Template should compile");

    assert_eq!(output, "<!DOCTYPE html><input disabled>");
}

#[test]
fn nested_doctype_does_not_leak_out() {
    let output = TestCompile::new("include head.pug\nbr")
        .file("/head.pug", "doctype html")
        .run()
        .expect("Template should compile");

    assert_eq!(output, "<!DOCTYPE html><br/>");
}

#[test]
fn self_include_is_rejected() {
    let err = TestCompile::new("p\ninclude index.pug")
        .run()
        .expect_err("Self include should fail");

    assert!(matches!(err, CompileError::Recursion { ref path } if path == "/index.pug"));

    let err = TestCompile::new("include /index.pug")
        .settings(Settings {
            detect_include_cycles: false,
            ..Settings::default()
        })
        .run()
        .expect_err("Self include should fail regardless of settings");

    assert!(matches!(err, CompileError::Recursion { .. }));
}

#[test]
fn self_include_through_another_spelling_is_rejected() {
    for source in ["include ./index.pug", "include .//index.pug", "include sub/../index.pug"] {
        let err = TestCompile::new(source)
            .run()
            .expect_err("Self include should fail");

        assert!(
            matches!(err, CompileError::Recursion { ref path } if path == "/index.pug"),
            "{source}: {err}"
        );
    }

    let err = TestCompile::new("include parts/nav.pug")
        .file("/parts/nav.pug", "nav\n  include ../parts/./nav.pug")
        .run()
        .expect_err("Self include should fail");

    assert!(matches!(err, CompileError::Recursion { ref path } if path == "/parts/nav.pug"));
}

#[test]
fn dotted_include_paths_resolve() {
    let output = TestCompile::new("include ./parts/../parts/nav.pug")
        .file("/parts/nav.pug", "nav")
        .run()
        .expect("Template should compile");

    assert_eq!(output, "<nav></nav>");
}

#[test]
fn indirect_cycle_is_rejected() {
    let err = TestCompile::new("include a.pug")
        .file("/a.pug", "include b.pug")
        .file("/b.pug", "include index.pug")
        .run()
        .expect_err("Include cycle should fail");

    assert!(matches!(err, CompileError::Recursion { ref path } if path == "/index.pug"));
}

#[test]
fn repeated_include_is_not_a_cycle() {
    let output = TestCompile::new("include item.pug\ninclude item.pug")
        .file("/item.pug", "li")
        .run()
        .expect("Template should compile");

    assert_eq!(output, "<li></li><li></li>");
}

#[test]
fn missing_include() {
    let err = TestCompile::new("include missing.pug")
        .run()
        .expect_err("Missing include should fail");

    assert!(matches!(
        err,
        CompileError::FileOpen { ref path, mode: OpenMode::Read, .. } if path == "/missing.pug"
    ));
}

#[test]
fn errors_in_included_templates_propagate() {
    let err = TestCompile::new("div\n  include broken.pug")
        .file("/broken.pug", "p\n  a(href")
        .run()
        .expect_err("Broken include should fail");

    assert!(matches!(err, CompileError::Syntax { ref path, .. } if path == "/broken.pug"));
}
