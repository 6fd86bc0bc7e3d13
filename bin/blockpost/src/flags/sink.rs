//! Upload sink flags.

use blockpost_sink::{HttpBlockSink, SinkAuth};
use clap::Parser;
use url::Url;

/// Flags for the HTTP document store the block records are posted to.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SinkArgs {
    /// URL of the document collection each block record is POSTed to.
    #[arg(long, env = "BLOCKPOST_SINK_URL")]
    pub sink_url: Url,
    /// Credential for the document store.
    ///
    /// Sent as a bearer token unless `--sink-auth-query` is set.
    #[arg(long, env = "BLOCKPOST_SINK_AUTH_TOKEN", hide_env_values = true)]
    pub sink_auth_token: Option<String>,
    /// Sends the credential as this query parameter instead of a bearer token.
    #[arg(long, value_name = "NAME", requires = "sink_auth_token", env = "BLOCKPOST_SINK_AUTH_QUERY")]
    pub sink_auth_query: Option<String>,
}

impl SinkArgs {
    /// Returns the configured credential, if any.
    pub(crate) fn auth(&self) -> Option<SinkAuth> {
        let token = self.sink_auth_token.clone()?;
        Some(match &self.sink_auth_query {
            Some(name) => SinkAuth::Query { name: name.clone(), value: token },
            None => SinkAuth::Bearer(token),
        })
    }

    /// Builds the [`HttpBlockSink`] described by the flags.
    pub(crate) fn build(&self) -> HttpBlockSink {
        let sink = HttpBlockSink::new(self.sink_url.clone());
        match self.auth() {
            Some(auth) => sink.with_auth(auth),
            None => sink,
        }
    }
}
