use miette::Diagnostic;
use thiserror::Error;

/// Main error type for droidex operations
#[derive(Error, Diagnostic, Debug)]
pub enum DroidexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(droidex::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(droidex::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Document error: {message}")]
    #[diagnostic(code(droidex::document))]
    Document {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No home directory available")]
    #[diagnostic(
        code(droidex::resolve),
        help("Set HOME (or pass --search-root) so an export root can be resolved")
    )]
    NoHome,

    #[error("Invalid selection: {message}")]
    #[diagnostic(code(droidex::selection))]
    Selection {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Rasterization of '{id}' failed: {message}")]
    #[diagnostic(code(droidex::rasterize))]
    Rasterize { id: String, message: String },

    #[error("Rasterizer program not found: {program}")]
    #[diagnostic(
        code(droidex::rasterize),
        help("Install Inkscape or point --rasterizer at a compatible program")
    )]
    RasterizerMissing { program: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(droidex::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DroidexError>;
