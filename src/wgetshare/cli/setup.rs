use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "wgetshare", bin_name = "wgetshare", version = get_version())]
#[command(about = "Share code snippets behind wget-friendly links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding wgetshare.toml and the stored snippets
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the web server (editor, viewer and raw surfaces)
    #[command(display_order = 1)]
    Serve {
        /// Listen address, e.g. 0.0.0.0:8080
        #[arg(long)]
        addr: Option<String>,

        /// Public base URL used in generated links
        #[arg(long)]
        origin: Option<String>,
    },

    /// Publish a file (or stdin) and print its share links
    #[command(alias = "p", display_order = 2)]
    Publish {
        /// File to publish; reads stdin when absent or "-"
        file: Option<PathBuf>,

        /// Filename used for the download (defaults to the file's stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Copy the wget command to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Show a shared snippet
    #[command(alias = "v", display_order = 3)]
    View {
        /// Share id
        id: String,
    },

    /// Print a shared snippet exactly as stored
    #[command(display_order = 4)]
    Raw {
        /// Share id
        id: String,
    },
}
