use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

/// Resolve the `@import`s of the entry stylesheet into one minified sheet
fn bundle_css() -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("bundling {}: {}", ENTRY, e))?;
    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying: {}", e))?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {}", e))?;
    Ok(output.code)
}

fn main() -> Result<(), String> {
    println!("cargo:rerun-if-changed=assets/css/");

    let css = bundle_css()?;
    fs::create_dir_all(OUTPUT_DIR).map_err(|e| format!("creating {}: {}", OUTPUT_DIR, e))?;
    fs::write(OUTPUT, css).map_err(|e| format!("writing {}: {}", OUTPUT, e))?;
    Ok(())
}
