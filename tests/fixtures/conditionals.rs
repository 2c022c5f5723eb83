use crate::harness::TestCompile;
use flash_pug::{GpioPin, Readings};

const BUTTON_PAGE: &str = "\
div
  if (IO_BUTTON = 1):
    p.pressed Pressed
    span #{IO_BUTTON}
  else:
    p.idle Idle
  footer";

fn compile_with(source: &str, readings: Readings) -> String {
    TestCompile::new(source)
        .readings(readings)
        .run()
        .expect("Template should compile")
}

#[test]
fn untaken_branch_is_dropped() {
    let output = compile_with(BUTTON_PAGE, Readings::default());

    assert_eq!(
        output,
        r#"<div><p class="idle">Idle</p><footer></footer></div>"#
    );
    assert!(!output.contains("Pressed"));
}

#[test]
fn taken_branch_is_rendered_in_place() {
    let output = compile_with(BUTTON_PAGE, Readings::default().with(GpioPin::Button, 1));

    assert_eq!(
        output,
        r#"<div><p class="pressed">Pressed</p><span>1</span><footer></footer></div>"#
    );
}

#[test]
fn chained_branches() {
    let source = "\
if (IO_TEMP = 0):
  p cold
else unless (IO_HUMIDITY = 0):
  p humid
else if True:
  p fallback
else:
  p never";

    let cases = [
        (Readings::default(), "<p>cold</p>"),
        (
            Readings::default()
                .with(GpioPin::Temp, 20)
                .with(GpioPin::Humidity, 40),
            "<p>humid</p>",
        ),
        (Readings::default().with(GpioPin::Temp, 20), "<p>fallback</p>"),
    ];

    for (readings, expected) in cases {
        assert_eq!(compile_with(source, readings), expected);
    }
}

#[test]
fn unless_without_else() {
    let source = "unless IO_LED:\n  p off\np always";

    assert_eq!(
        compile_with(source, Readings::default()),
        "<p>off</p><p>always</p>"
    );
    assert_eq!(
        compile_with(source, Readings::default().with(GpioPin::Led, 1)),
        "<p>always</p>"
    );
}

#[test]
fn nested_conditionals() {
    let source = "\
ul
  if True:
    if (IO_ROTATE = 3):
      li three
    li always
  li last";

    assert_eq!(
        compile_with(source, Readings::default().with(GpioPin::Rotate, 3)),
        "<ul><li>three</li><li>always</li><li>last</li></ul>"
    );
    assert_eq!(
        compile_with(source, Readings::default()),
        "<ul><li>always</li><li>last</li></ul>"
    );
}

#[test]
fn malformed_guards_in_skipped_branches_are_ignored() {
    let source = "if False:\n  p(oops\nelse:\n  p fine";

    assert_eq!(compile_with(source, Readings::default()), "<p>fine</p>");
}

#[test]
fn boolean_attribute_expressions() {
    let source = "doctype html\ninput(type=\"checkbox\", checked=(IO_LED = 1))";

    assert_eq!(
        compile_with(source, Readings::default().with(GpioPin::Led, 1)),
        r#"<!DOCTYPE html><input type="checkbox" checked>"#
    );
    assert_eq!(
        compile_with(source, Readings::default()),
        r#"<!DOCTYPE html><input type="checkbox">"#
    );
}
