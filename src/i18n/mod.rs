//! Internationalization for the dashboard's two languages.
//!
//! # Architecture
//!
//! - `registry`: the supported languages and their metadata
//! - `language`: validated `Language` type used everywhere a language is passed
//! - `strings`: static per-language label tables
//! - `validator`: startup validation of the label tables
//!
//! # Example
//!
//! ```rust,ignore
//! use lokriti_dashboard::i18n::Language;
//!
//! let nepali = Language::from_code("np")?;
//! assert_eq!(nepali.strings().nav.sales, "बिक्री");
//! assert_eq!(nepali.toggled(), Language::ENGLISH);
//! ```

mod language;
mod registry;
pub mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
pub use validator::{validate_label_tables, LabelError, LabelValidator, ValidationReport};
