#![forbid(unsafe_code)]

//! Gettext message extraction over Handlebars template trees.
//!
//! ```
//! use hbs_gettext_core::{Call, Expr, Extractor, Program, Statement};
//!
//! let template = Program::new(vec![Statement::Mustache(Call::new(
//!     "gettext",
//!     vec![Expr::string("Hello")],
//!     1,
//! ))]);
//! let catalog = Extractor::default().parse(&template).unwrap();
//! assert_eq!(catalog.get("Hello").unwrap().line, vec![1]);
//! ```

mod catalog;
mod error;
mod extractor;
mod keyword;
mod message_key;
mod tree;

pub use catalog::{Catalog, MessageRecord};
pub use error::{ConfigError, CoreError, CoreResult, ExtractError};
pub use extractor::Extractor;
pub use keyword::{KeywordPositions, KeywordSpec, MSGCTXT, MSGID, MSGID_PLURAL, RoleMap};
pub use message_key::{CONTEXT_DELIMITER, message_key};
pub use tree::{Block, Call, Directive, DirectiveKind, Expr, HashPair, Program, Statement};
