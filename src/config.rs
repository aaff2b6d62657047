use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use http::HeaderMap;

/// Overrides applied to a single request: extra headers and an API call
/// timeout. Attached to an input through its builder.
#[non_exhaustive]
#[derive(Clone, PartialEq)]
pub struct RequestOverrideConfig {
    pub headers: Option<HeaderMap>,
    pub api_call_timeout: Option<Duration>,
}
impl RequestOverrideConfig {
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }
    pub fn api_call_timeout(&self) -> Option<Duration> {
        self.api_call_timeout
    }
}
impl Debug for RequestOverrideConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("RequestOverrideConfig");
        formatter.field("headers", &self.headers);
        formatter.field("api_call_timeout", &self.api_call_timeout);
        formatter.finish()
    }
}

pub mod request_override_config {
    use std::time::Duration;

    use http::header::{HeaderName, HeaderValue};
    use http::HeaderMap;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) headers: Option<HeaderMap>,
        pub(crate) api_call_timeout: Option<Duration>,
    }
    impl Builder {
        /// Appends one header; repeated names accumulate.
        pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
            let mut map = self.headers.unwrap_or_default();
            map.append(name, value);
            self.headers = Some(map);
            self
        }
        pub fn set_headers(mut self, input: Option<HeaderMap>) -> Self {
            self.headers = input;
            self
        }
        pub fn api_call_timeout(mut self, input: Duration) -> Self {
            self.api_call_timeout = Some(input);
            self
        }
        pub fn set_api_call_timeout(mut self, input: Option<Duration>) -> Self {
            self.api_call_timeout = input;
            self
        }
        pub fn build(self) -> crate::config::RequestOverrideConfig {
            crate::config::RequestOverrideConfig {
                headers: self.headers,
                api_call_timeout: self.api_call_timeout,
            }
        }
    }
}
impl RequestOverrideConfig {
    pub fn builder() -> crate::config::request_override_config::Builder {
        crate::config::request_override_config::Builder::default()
    }
}
