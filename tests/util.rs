use php_docblocker::util::*;
use tower_lsp::lsp_types::Position;

#[test]
fn line_lookup() {
    let content = "<?php\n  /**\nclass A {}\n";
    assert_eq!(line_at(content, 1), Some("  /**"));
    assert_eq!(line_at(content, 5), None);
}

#[test]
fn char_and_byte_columns() {
    let line = "  $naïve = 1;";
    assert_eq!(char_to_byte(line, 5), 5);
    // `ï` is two bytes wide.
    assert_eq!(char_to_byte(line, 6), 7);
    assert_eq!(char_to_byte(line, 100), line.len());
    assert_eq!(byte_to_char(line, 7), 6);
}

#[test]
fn split_and_indent() {
    let content = "<?php\n    /** */\n";
    let (before, after) = split_at_position(
        content,
        Position {
            line: 1,
            character: 7,
        },
    )
    .unwrap();
    assert_eq!(before, "    /**");
    assert_eq!(after, " */");
    assert_eq!(indentation("\t  x"), "\t  ");
}

#[test]
fn trailing_comments_are_cut_outside_strings() {
    assert_eq!(strip_trailing_comment("$a, // first"), "$a,");
    assert_eq!(strip_trailing_comment("$b # second"), "$b");
    assert_eq!(strip_trailing_comment("int /* note */ {"), "int");
    assert_eq!(strip_trailing_comment("$s = '// #x'"), "$s = '// #x'");
    assert_eq!(strip_trailing_comment("#[Attr] $x"), "#[Attr] $x");
}
