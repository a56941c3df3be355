use worker::RouteContext;

/// The binding name for the shared secret set in Cloudflare.
pub const CLOUDFRONT_SECRET_BINDING: &str = "CLOUDFRONT_SECRET";

/// Gets the shared secret, read fresh on every invocation.
/// Returns [`None`] when the binding is not set.
pub fn get_cloudfront_secret(ctx: &RouteContext<()>) -> Option<String> {
    ctx.secret(CLOUDFRONT_SECRET_BINDING)
        .map(|secret| secret.to_string())
        .ok()
}
