// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

#[derive(Parser, Debug, Clone)]
#[command(name = "ornament-tour")]
#[command(about = "Decorated tree with an automatic camera tour", long_about = None)]
pub struct Cli {
    /// Run without a window and print one JSON pose per frame
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Fixed frame rate used in headless mode
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Seed for the content shuffle (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// JSON content list (array of ids or {id, colorHint} objects)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Start with the tour disabled
    #[arg(long = "no-tour", default_value = "false")]
    pub no_tour: bool,

    /// Override the tour speed (0-1)
    #[arg(long)]
    pub tour_speed: Option<f32>,

    /// Scripted drag (headless only): start frame and horizontal pixels per frame
    #[arg(long, num_args = 2, value_names = ["FRAME", "DX"], allow_negative_numbers = true)]
    pub drag: Option<Vec<f32>>,
}

impl Cli {
    /// Applies command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if self.no_tour {
            settings.tour_enabled = false;
        }
        if let Some(speed) = self.tour_speed {
            settings.tour_speed = speed;
        }
        settings.sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ornament-tour"]);
        assert!(!cli.headless);
        assert_eq!(cli.frames, 600);
        assert_eq!(cli.fps, 60.0);
        assert_eq!(cli.seed, None);
        assert!(!cli.no_tour);
    }

    #[test]
    fn test_headless_flags() {
        let cli = Cli::parse_from([
            "ornament-tour",
            "--headless",
            "--frames",
            "30",
            "--seed",
            "7",
            "--drag",
            "10",
            "4.5",
        ]);
        assert!(cli.headless);
        assert_eq!(cli.frames, 30);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.drag, Some(vec![10.0, 4.5]));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["ornament-tour", "--no-tour", "--tour-speed", "3"]);
        let settings = cli.apply_overrides(Settings::default());
        assert!(!settings.tour_enabled);
        assert_eq!(settings.tour_speed, 1.0);
    }
}
