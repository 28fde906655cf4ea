use clap::{Parser, Subcommand};

/// Offline legal information for India, from the terminal.
#[derive(Parser, Debug)]
#[command(name = "justia", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the program name and version
    Version,

    /// Ask a legal question (answered by the offline responder)
    Ask {
        message: String,

        /// Response language code (en, hi, ta, te, bn)
        #[arg(long, default_value = "en")]
        language: String,

        /// State id, e.g. maharashtra
        #[arg(long)]
        state: Option<String>,
    },

    /// List supported states
    States,

    /// List supported case types
    CaseTypes,

    /// Print the document checklist for a case type
    Documents { case_type: String },

    /// Find NGOs and legal aid for a state and case type
    Ngos {
        #[arg(long)]
        state: String,

        #[arg(long)]
        case_type: String,
    },

    /// Look up a demo court case by number
    Lookup { case_number: String },
}
