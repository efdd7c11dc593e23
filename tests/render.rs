//! Tests for snippet and plain-text rendering.

use php_docblocker::render::{build_plain, build_snippet};
use php_docblocker::{Config, Doc, parse_declaration};

fn doc(line: &str) -> Doc {
    parse_declaration(line).unwrap()
}

#[test]
fn function_snippet_with_default_config() {
    let rendered = build_snippet(
        &doc("public function add($a, $b = 1.5) {"),
        &Config::default(),
    );
    assert_eq!(
        rendered,
        concat!(
            "/**\n",
            " * ${1:Undocumented function}\n",
            " *\n",
            " * @param ${2:[type]} ${3:\\$a}\n",
            " * @param ${4:float} ${5:\\$b}\n",
            " * @return ${6:[type]}\n",
            " */",
        )
    );
}

#[test]
fn property_snippet() {
    let rendered = build_snippet(&doc("public $count = 0;"), &Config::default());
    assert_eq!(
        rendered,
        "/**\n * ${1:Undocumented variable}\n *\n * @var ${2:int}\n */"
    );
}

#[test]
fn single_line_property() {
    let config = Config {
        single_line_property: true,
        ..Config::default()
    };
    assert_eq!(
        build_snippet(&doc("private static $name;"), &config),
        "/** @var ${1:[type]} */"
    );
    assert_eq!(
        build_plain(&doc("public $count = 0;"), &config),
        "/** @var int */"
    );
}

#[test]
fn void_return_respects_return_void() {
    let model = doc("protected function save(): void {");
    assert_eq!(model.return_type.as_deref(), Some("void"));

    let with_void = build_plain(&model, &Config::default());
    assert!(with_void.contains("@return void"));

    let config = Config {
        return_void: false,
        ..Config::default()
    };
    let without_void = build_plain(&model, &config);
    assert!(!without_void.contains("@return"));
    assert_eq!(without_void, "/**\n * Undocumented function\n */");
}

#[test]
fn no_gap() {
    let config = Config {
        gap: false,
        ..Config::default()
    };
    assert_eq!(
        build_plain(&doc("function f($x)"), &config),
        "/**\n * Undocumented function\n * @param [type] $x\n * @return [type]\n */"
    );
}

#[test]
fn return_gap_only_after_params() {
    let config = Config {
        return_gap: true,
        ..Config::default()
    };
    assert_eq!(
        build_plain(&doc("function f($x): int"), &config),
        "/**\n * Undocumented function\n *\n * @param [type] $x\n *\n * @return int\n */"
    );
    assert_eq!(
        build_plain(&doc("function g(): int"), &config),
        "/**\n * Undocumented function\n *\n * @return int\n */"
    );
}

#[test]
fn extra_lines_and_separator() {
    let config = Config {
        extra: vec!["".to_string(), "@author Jane".to_string()],
        tag_separator: "  ".to_string(),
        ..Config::default()
    };
    assert_eq!(
        build_plain(&doc("public $x = 'a';"), &config),
        "/**\n * Undocumented variable\n *\n * @var  string\n *\n * @author Jane\n */"
    );
}

#[test]
fn class_block_has_gap_only_for_extras() {
    let model = doc("class User");
    assert_eq!(
        build_plain(&model, &Config::default()),
        "/**\n * Undocumented class\n */"
    );

    let config = Config {
        extra: vec!["@package App".to_string()],
        ..Config::default()
    };
    assert_eq!(
        build_plain(&model, &config),
        "/**\n * Undocumented class\n *\n * @package App\n */"
    );
}

#[test]
fn empty_model_ignores_gap_and_extras() {
    let config = Config {
        extra: vec!["@author Jane".to_string()],
        ..Config::default()
    };
    assert_eq!(build_snippet(&Doc::empty(), &config), "/**\n * ${1}\n */");
    assert_eq!(build_plain(&Doc::empty(), &config), "/**\n * \n */");
}

#[test]
fn placeholder_text_is_escaped() {
    let mut model = Doc::new("Costs $5 {or} \\more}");
    model.return_type = Some("array{a: int}".to_string());
    let rendered = build_snippet(&model, &Config::default());
    assert!(rendered.contains("${1:Costs \\$5 {or\\} \\\\more\\}}"));
    assert!(rendered.contains("${2:array{a: int\\}}"));
}

#[test]
fn extra_lines_pass_through_snippets_unchanged() {
    let config = Config {
        extra: vec!["@since ${CURRENT_YEAR}".to_string(), "@see \\Foo".to_string()],
        ..Config::default()
    };
    let rendered = build_snippet(&doc("class A"), &config);
    assert!(rendered.contains("\n * @since ${CURRENT_YEAR}\n"));
    assert!(rendered.contains("\n * @see \\Foo\n"));
}
