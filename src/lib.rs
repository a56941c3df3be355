pub mod api;
mod config;
pub mod verifier;

use api::{requests::RequestDescriptor, responses::DecisionRoute};
use config::get_cloudfront_secret;
use tracing::warn;
use tracing_web::MakeConsoleWriter;
use verifier::verify_request;
use worker::{event, Context, Env, Request, Response, RouteContext, Router};

#[event(start)]
fn start() {
    // Workers timestamp console output already.
    let _ = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeConsoleWriter)
        .try_init();
}

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> worker::Result<Response> {
    Router::new()
        .post_async("/", authorize_event_handler)
        .get("/verify", verify_headers_handler)
        .run(req, env)
        .await
}

/// Handle an authorizer event posted as JSON, the decision is returned in the body.
async fn authorize_event_handler(mut req: Request, ctx: RouteContext<()>) -> worker::Result<Response> {
    // An unreadable body is the same as an event without headers.
    let body = match req.bytes().await {
        Ok(body) => body,
        Err(err) => {
            warn!(%err, "Unable to read the authorizer event body");
            Vec::new()
        }
    };
    let descriptor = RequestDescriptor::from_slice(&body);
    let secret = get_cloudfront_secret(&ctx);

    let response = verify_request(&descriptor, secret.as_deref());
    Ok(Response::from_json(&response)?
        .with_status(response.status_code(DecisionRoute::AuthorizerEvent)))
}

/// Check the headers this request itself arrived with, responding with a 403 when unauthorized.
fn verify_headers_handler(req: Request, ctx: RouteContext<()>) -> worker::Result<Response> {
    let descriptor = RequestDescriptor::from_headers(req.headers().entries());
    let secret = get_cloudfront_secret(&ctx);

    let response = verify_request(&descriptor, secret.as_deref());
    Ok(Response::from_json(&response)?.with_status(response.status_code(DecisionRoute::RequestGate)))
}
