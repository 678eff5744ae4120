//! Command line handling
//!
//! Every flag is optional; anything left out comes from the config file.
//! clap prints usage for `-h` and exits with status 2 on bad input.

use std::path::PathBuf;

use clap::Parser;

use crate::config::PlayerConfig;

/// Replay a recorded Dota 2 hero path over the map.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "pathview-player")]
pub struct LaunchOptions {
    /// Sample document to view (overrides config)
    #[arg(value_name = "PATH_FILE")]
    pub path_file: Option<PathBuf>,
    /// Background map image (overrides config)
    #[arg(long = "map", value_name = "PATH")]
    pub map_image: Option<PathBuf>,
    /// Alternate config file
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// Write the default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

/// Input files after applying command line overrides to the config
#[derive(Debug, Clone, PartialEq)]
pub struct InputFiles {
    pub map_image: PathBuf,
    pub path_file: PathBuf,
}

impl LaunchOptions {
    pub fn input_files(&self, config: &PlayerConfig) -> InputFiles {
        InputFiles {
            map_image: self
                .map_image
                .clone()
                .unwrap_or_else(|| config.paths.map_image.clone()),
            path_file: self
                .path_file
                .clone()
                .unwrap_or_else(|| config.paths.path_file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<LaunchOptions, clap::Error> {
        let argv = std::iter::once("pathview-player").chain(args.iter().copied());
        LaunchOptions::try_parse_from(argv)
    }

    #[test]
    fn test_no_args_uses_config() {
        let options = parse(&[]).unwrap();
        assert_eq!(options, LaunchOptions::default());

        let config = PlayerConfig::default();
        let files = options.input_files(&config);
        assert_eq!(files.map_image, config.paths.map_image);
        assert_eq!(files.path_file, config.paths.path_file);
    }

    #[test]
    fn test_overrides() {
        let options = parse(&["--map", "m.png", "run.json", "--config", "c.yaml"]).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("c.yaml")));

        let files = options.input_files(&PlayerConfig::default());
        assert_eq!(files.map_image, PathBuf::from("m.png"));
        assert_eq!(files.path_file, PathBuf::from("run.json"));
    }

    #[test]
    fn test_equals_form() {
        let options = parse(&["--map=x.png"]).unwrap();
        assert_eq!(options.map_image, Some(PathBuf::from("x.png")));
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["--map"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());

        // Short options are never taken as a document path
        let err = parse(&["-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_flags() {
        let options = parse(&["--init-config"]).unwrap();
        assert!(options.init_config);

        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
