use clap::Parser;
use dirls::ListingOptions;
use std::path::PathBuf;

/// List directory contents.
#[derive(Debug, Parser)]
#[command(name = "dirls", version)]
pub struct Args {
    /// Use a long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Do not ignore entries starting with .
    #[arg(short = 'a')]
    pub all: bool,

    /// Reverse order while sorting
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Directory to list
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

impl Args {
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            show_hidden: self.all,
            reverse: self.reverse,
            detailed: self.long,
        }
    }
}
