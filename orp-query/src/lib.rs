//! Query-string parsing with repeated-parameter accumulation.
//!
//! ```
//! use orp_query::{QueryString, QueryValue};
//!
//! let q = QueryString::parse("a=1&a=2&a=3&b=x%20y");
//! assert_eq!(q.all("a"), ["1", "2", "3"]);
//! assert_eq!(q.get("b"), Some(&QueryValue::Single("x y".to_string())));
//! ```
//!
//! The query text is always passed in explicitly, either as the raw query
//! component ([`QueryString::parse`]) or as a whole URL
//! ([`QueryString::from_url`]).

pub mod error;
pub mod query;
pub mod value;

pub use error::{QueryError, QueryResult};
pub use query::QueryString;
pub use value::QueryValue;
