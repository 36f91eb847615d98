//! # jrpc
//!
//! Positional JSON-RPC wire types for talking to a remote session server.
//!
//! ## Architecture
//!
//! A call is `{scope, method, params}`. It is posted as a `Request` envelope to
//! `<base-url>/<scope>/<method>` and answered by one of three shapes:
//!
//! ```text
//! { "result": <any>, "ep"?: "true" | "false" }
//! { "asyncHandle": <token> }
//! { "error": { "code": <int>, "message": <string> } }
//! ```
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod frame;


pub use error::ErrorKind;
pub use error::Result;
pub use error::RpcError;
pub use error::WireError;
pub use error::code;
pub use frame::AsyncHandle;
pub use frame::Call;
pub use frame::Request;
pub use frame::Response;
pub use serde_json::Value;

/// Converts one parameter to its positional wire value.
///
/// `None` becomes an explicit `null`.
pub fn to_param<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Builds a positional parameter list, yielding `jrpc::Result<Vec<Value>>`.
///
/// ```
/// let params = jrpc::params!["abc", 1, None::<&str>, true].unwrap();
/// assert_eq!(params.len(), 4);
/// assert!(params[2].is_null());
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Result::<::std::vec::Vec<$crate::Value>>::Ok(::std::vec::Vec::new())
    };
    ($($p:expr),+ $(,)?) => {{
        let build = || -> $crate::Result<::std::vec::Vec<$crate::Value>> {
            ::std::result::Result::Ok(::std::vec![$($crate::to_param(&$p)?),+])
        };
        build()
    }};
}
