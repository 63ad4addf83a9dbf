//! Conversion settings gathered from the command line.

use std::path::PathBuf;

use pyhl_html::RenderOptions;

use crate::CliError;

/// Settings for one `pyhl` conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Input paths. Empty, or a lone `-`, means stdin.
    pub inputs: Vec<String>,
    /// Where a single conversion is written. `None` means stdout.
    pub output: Option<PathBuf>,
    /// Exit with status 1 if any scan issue was found.
    pub strict: bool,
    pub render: RenderOptions,
}

impl HighlightConfig {
    /// Build a config from the arguments after the program name.
    ///
    /// Flags may appear before or after file names. `--` ends option
    /// parsing; everything after it is a file name.
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        let mut config = HighlightConfig::default();
        let mut iter = args.iter();
        let mut files_only = false;

        while let Some(arg) = iter.next() {
            if files_only || arg == "-" || !arg.starts_with('-') {
                config.inputs.push(arg.clone());
                continue;
            }
            match arg.as_str() {
                "--" => files_only = true,
                "-n" | "--line-numbers" => config.render.line_numbers = true,
                "-s" | "--standalone" => config.render.standalone = true,
                "--strict" => config.strict = true,
                "-o" | "--output" => {
                    let Some(path) = iter.next() else {
                        return Err(CliError::MissingValue(arg.clone()));
                    };
                    config.output = Some(PathBuf::from(path));
                }
                _ => {
                    if let Some(path) = arg.strip_prefix("--output=") {
                        config.output = Some(PathBuf::from(path));
                    } else if let Some(title) = arg.strip_prefix("--title=") {
                        config.render.title = Some(title.to_string());
                    } else {
                        return Err(CliError::UnknownOption(arg.clone()));
                    }
                }
            }
        }

        if config.inputs.len() > 1 {
            if config.output.is_some() {
                return Err(CliError::OutputWithManyInputs);
            }
            if config.inputs.iter().any(|input| input == "-") {
                return Err(CliError::StdinWithManyInputs);
            }
        }
        Ok(config)
    }

    /// Whether the run reads stdin instead of files.
    pub fn reads_stdin(&self) -> bool {
        match self.inputs.as_slice() {
            [] => true,
            [only] => only == "-",
            _ => false,
        }
    }
}
