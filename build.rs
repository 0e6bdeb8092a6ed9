//! Build script for minifying the embedded catalog runtime and theme stylesheet.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use std::fs;
use std::path::Path;

/// Placeholders substituted at render time; they must survive minification.
const CATALOG_PLACEHOLDERS: [&str; 3] = [
    "__NB_ACTIVE_THRESHOLD__",
    "__NB_THROTTLE_MS__",
    "__NB_REVEAL_OFFSET__",
];

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir);

    minify_catalog_js("src/embed/catalog.js", &out_path.join("catalog.min.js"));
    minify_css_file("src/embed/theme.css", &out_path.join("theme.min.css"));

    println!("cargo:rerun-if-changed=src/embed/catalog.js");
    println!("cargo:rerun-if-changed=src/embed/theme.css");
}

fn minify_js(source: &str) -> String {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();

    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "Parse errors: {:?}", ret.errors);

    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);

    Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code
}

fn minify_catalog_js(input: &str, output: &Path) {
    let source = fs::read_to_string(input).expect("Failed to read catalog.js");
    let code = minify_js(&source);

    for placeholder in CATALOG_PLACEHOLDERS {
        assert!(
            code.contains(placeholder),
            "minified catalog.js lost the {} placeholder",
            placeholder
        );
    }

    fs::write(output, code).expect("Failed to write minified catalog JS");
}

fn minify_css(source: &str) -> String {
    let stylesheet =
        StyleSheet::parse(source, ParserOptions::default()).expect("Failed to parse CSS");
    stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to minify CSS")
        .code
}

fn minify_css_file(input: &str, output: &Path) {
    let source = fs::read_to_string(input).expect("Failed to read CSS file");
    let code = minify_css(&source);
    fs::write(output, code).expect("Failed to write minified CSS");
}
