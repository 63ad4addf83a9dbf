#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use pyhl_html::RenderOptions;

fn convert(source: &str, config: &HighlightConfig) -> Conversion {
    match convert_source("test.py", source, config) {
        Ok(conversion) => conversion,
        Err(e) => panic!("conversion failed: {e}"),
    }
}

// === Single source ===

#[test]
fn converts_clean_source() {
    let conversion = convert("x = 5", &HighlightConfig::default());
    assert_eq!(
        conversion.html,
        "<pre class='python'><div class='codeText'>\
         <span class='codeWord'>x</span> = <span class='codeNum'>5</span>\
         </div></pre>"
    );
    assert!(conversion.issues.is_empty());
}

#[test]
fn collects_scan_issues() {
    let conversion = convert("s = 'open\n\u{bd}", &HighlightConfig::default());
    let kinds: Vec<_> = conversion.issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            pyhl_lexer::IssueKind::UnterminatedString,
            pyhl_lexer::IssueKind::StalledProgress,
        ]
    );
}

#[test]
fn render_options_are_applied() {
    let config = HighlightConfig {
        render: RenderOptions {
            line_numbers: true,
            ..RenderOptions::default()
        },
        ..HighlightConfig::default()
    };
    let conversion = convert("a\nb", &config);
    assert!(conversion
        .html
        .contains("<div class='codeLN'><div>1</div><div>2</div></div>"));
}

// === Summary ===

#[test]
fn summary_failure_rules() {
    let clean = ConvertSummary {
        converted: 2,
        failed: 0,
        issues: 0,
    };
    let with_issues = ConvertSummary {
        issues: 3,
        ..clean
    };
    let with_failure = ConvertSummary {
        failed: 1,
        ..clean
    };
    assert!(!clean.is_failure(true));
    assert!(!with_issues.is_failure(false));
    assert!(with_issues.is_failure(true));
    assert!(with_failure.is_failure(false));
}

#[test]
fn html_path_appends_extension() {
    assert_eq!(html_path("src/app.py"), PathBuf::from("src/app.py.html"));
}

// === Files ===

#[test]
fn single_file_to_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("one.py");
    let output = dir.path().join("one.html");
    std::fs::write(&input, "pass").unwrap();

    let config = HighlightConfig {
        inputs: vec![input.display().to_string()],
        output: Some(output.clone()),
        ..HighlightConfig::default()
    };
    let summary = run_convert(&config).unwrap();
    assert_eq!(
        summary,
        ConvertSummary {
            converted: 1,
            failed: 0,
            issues: 0,
        }
    );
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        "<pre class='python'><div class='codeText'><span class='codeKey'>pass</span></div></pre>"
    );
}

#[test]
fn many_files_written_next_to_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.py");
    let b = dir.path().join("b.py");
    std::fs::write(&a, "None").unwrap();
    std::fs::write(&b, "'oops").unwrap();

    let inputs = vec![a.display().to_string(), b.display().to_string()];
    let config = HighlightConfig {
        inputs: inputs.clone(),
        ..HighlightConfig::default()
    };
    let summary = run_convert(&config).unwrap();
    assert_eq!(
        summary,
        ConvertSummary {
            converted: 2,
            failed: 0,
            issues: 1,
        }
    );

    let a_html = std::fs::read_to_string(html_path(&inputs[0])).unwrap();
    assert!(a_html.contains("<span class='codeDefCnst'>None</span>"));
    let b_html = std::fs::read_to_string(html_path(&inputs[1])).unwrap();
    assert!(b_html.contains("<span class='codeStr codeErr'>'oops</span>"));
}

#[test]
fn missing_file_counts_as_failure_in_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.py");
    std::fs::write(&good, "x").unwrap();
    let missing = dir.path().join("missing.py");

    let config = HighlightConfig {
        inputs: vec![good.display().to_string(), missing.display().to_string()],
        ..HighlightConfig::default()
    };
    let summary = run_convert(&config).unwrap();
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 1);
    assert!(summary.is_failure(false));
}

#[test]
fn missing_single_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.py").display().to_string();
    let config = HighlightConfig {
        inputs: vec![missing.clone()],
        ..HighlightConfig::default()
    };
    match run_convert(&config) {
        Err(CliError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
