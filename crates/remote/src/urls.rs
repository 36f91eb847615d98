//! Application URLs for content the server serves outside the RPC channel.
//!
//! Resolving any of these counts as activity: a suspended session may be
//! resumed by the fetch, so event listening is re-ensured first.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;

use crate::api::scope;
use crate::client::RemoteServer;

/// Characters left alone by a URI component encoder.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes a query component, spaces as `+`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string().replace("%20", "+")
}

impl RemoteServer {
    pub fn application_url(&self, path: &str) -> String {
        self.ensure_listening_for_events();
        format!("{}{}", self.base_url(), path.trim_start_matches('/'))
    }

    pub fn graphics_url(&self, filename: &str) -> String {
        format!("{}/{}", self.application_url(scope::GRAPHICS), filename)
    }

    pub fn help_url(&self, topic_uri: &str) -> String {
        format!("{}/{}", self.application_url(scope::HELP), topic_uri)
    }

    /// Progress page shown while a long document operation runs.
    pub fn progress_url(&self, message: &str) -> String {
        format!(
            "{}?message={}",
            self.application_url(&format!("{}/progress", scope::SOURCE)),
            encode_component(message),
        )
    }

    pub fn file_upload_url(&self) -> String {
        self.application_url(scope::UPLOAD)
    }

    /// URL of a file under the user's home, given its home-relative path.
    pub fn home_file_url(&self, home_relative: &str) -> String {
        format!("{}/{}", self.application_url(scope::FILES), home_relative.trim_start_matches('/'))
    }

    /// URL of an arbitrary file shown through the server.
    pub fn file_show_url(&self, path: &str) -> String {
        format!("{}?path={}", self.application_url(scope::FILE_SHOW), encode_component(path))
    }

    pub fn file_export_url(&self, name: &str, file: &str) -> String {
        format!(
            "{}?name={}&file={}",
            self.application_url(scope::EXPORT),
            encode_component(name),
            encode_component(file),
        )
    }

    /// Export URL bundling several files of one directory.
    pub fn file_export_many_url(&self, name: &str, parent: &str, filenames: &[&str]) -> String {
        let mut url = format!(
            "{}?name={}&parent={}&",
            self.application_url(scope::EXPORT),
            encode_component(name),
            encode_component(parent),
        );
        for (i, file) in filenames.iter().enumerate() {
            url.push_str(&format!("file{}={}&", i, encode_component(file)));
        }
        url
    }
}
