//! HTTP gateway wrapping `gloo-net` for calls to the trading web server.
//!
//! Every call is a form-encoded `POST`; the response body is plain text.

use daytrader_app::ports::TradingGateway;
use daytrader_domain::endpoint::BaseUrl;
use daytrader_domain::error::GatewayError;
use daytrader_domain::request::PendingRequest;
use gloo_net::http::Request;
use web_sys::UrlSearchParams;

/// [`TradingGateway`] backed by the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base: BaseUrl,
}

impl HttpGateway {
    pub fn new(base: BaseUrl) -> Self {
        Self { base }
    }
}

impl TradingGateway for HttpGateway {
    async fn login(&self, username: &str) -> Result<(), GatewayError> {
        post_form(&self.base.login(), &[("username", username)])
            .await
            .map(|_| ())
    }

    async fn submit(&self, request: &PendingRequest) -> Result<String, GatewayError> {
        post_form(&self.base.action(request.command), &request.form_fields()).await
    }
}

/// POST `fields` as `application/x-www-form-urlencoded` and return the body.
///
/// A non-2xx status yields [`GatewayError::Rejected`] carrying the body text
/// the server wrote, so it can be shown to the user verbatim.
async fn post_form(url: &str, fields: &[(&str, &str)]) -> Result<String, GatewayError> {
    let params = UrlSearchParams::new()
        .map_err(|err| GatewayError::Transport(format!("{err:?}")))?;
    for (key, value) in fields {
        params.append(key, value);
    }

    let resp = Request::post(url)
        .body(params)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    if ok {
        Ok(body)
    } else {
        leptos::logging::warn!("{url} answered {status}");
        Err(GatewayError::Rejected { status, body })
    }
}

fn transport(err: gloo_net::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}
