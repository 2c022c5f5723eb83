html_tests! {
    bare_doctype: "doctype" => "<!DOCTYPE html>";
    html_doctype: "doctype html" => "<!DOCTYPE html>";
    xml_doctype: "doctype xml" => r#"<?xml version="1.0" encoding="utf-8" ?>"#;
    custom_doctype: "doctype foo" => "<!DOCTYPE foo>";
    strict_doctype: "doctype strict" =>
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#;

    void_in_html: "doctype html\nimg(src=\"a.png\")" => r#"<!DOCTYPE html><img src="a.png">"#;
    void_in_xml: "doctype xml\nimg(src=\"a.png\")" =>
        r#"<?xml version="1.0" encoding="utf-8" ?><img src="a.png"></img>"#;
    void_without_dialect: "img(src=\"a.png\")" => r#"<img src="a.png"/>"#;
    forced_void: "doctype html\nfoo(bar=\"baz\")/" => r#"<!DOCTYPE html><foo bar="baz">"#;
    other_doctype_keeps_dialect_open: "doctype strict\nbr" =>
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"><br/>"#;

    escaped_attribute: r#"a(href="1 < 2 & 3")"# => r#"<a href="1 &lt; 2 &amp; 3"></a>"#;
    unescaped_attribute: r#"a(href!="<raw>")"# => r#"<a href="<raw>"></a>"#;
    single_quoted_attribute: "a(title='say \"hi\"')" => r#"<a title="say &quot;hi&quot;"></a>"#;
    boolean_attribute_in_html: "doctype html\ninput(checked)" => "<!DOCTYPE html><input checked>";
    boolean_attribute_without_dialect: "input(checked)" => r#"<input checked="checked"/>"#;
    unchecked_attribute_is_omitted: "input(checked=False)" => "<input/>";
    stray_commas: "a(, href=\"/\",,)" => r#"<a href="/"></a>"#;
    shorthand_attributes_come_first: "a.btn#go(href=\"/\") Go" => r#"<a class="btn" id="go" href="/">Go</a>"#;
    multiline_attributes: "a(\n  href=\"/\"\n  title=\"home\"\n) Home" => r#"<a href="/" title="home">Home</a>"#;

    nesting: "ul\n  li one\n  li two" => "<ul><li>one</li><li>two</li></ul>";
    deep_dedent: "div\n  div\n    div\np" => "<div><div><div></div></div></div><p></p>";
    block_expansion: "ul: li: a(href=\"/\") Home\np" => r#"<ul><li><a href="/">Home</a></li></ul><p></p>"#;
    block_expansion_with_children: "ul: li\n  span" => "<ul><li><span></span></li></ul>";
    block_text: "p.\n  first\n\n  second\ndiv" => "<p>first\n\nsecond</p><div></div>";
    piped_text_joins_lines: "p\n  | one\n  | two" => "<p>one\ntwo</p>";
    literal_html: "<section>\n  p\n</section>" => "<section><p></p></section>";
    literal_and_piped_do_not_join: "<br>\n| text" => "<br>text";
    comment: "// note\np" => "<!-- note--><p></p>";
    multiline_comment: "//\n  one\n  two" => "<!--one\ntwo-->";
    unbuffered_comment: "//- hidden\n  nested\np" => "<p></p>";
    interpolation: "p Hi #[b there], friend" => "<p>Hi <b>there</b>, friend</p>";
    text_brackets_are_literal: "p [1] #2" => "<p>[1] #2</p>";
    tag_names_that_start_with_keywords: "iframe\nelsewhere" => "<iframe></iframe><elsewhere></elsewhere>";
    tabs: "ul\n\tli\n\t\tspan" => "<ul><li><span></span></li></ul>";
    windows_line_endings: "ul\r\n  li\r\n" => "<ul><li></li></ul>";
    empty_template: "" => "";
}
