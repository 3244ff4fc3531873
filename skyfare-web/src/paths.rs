//! Links and router base under an optional deployment prefix.
//!
//! `PUBLIC_URL` is read at compile time. A build served from `/book` links to
//! `/book/seats`; a build without it links to `/seats`.
use skyfare_core::View;

fn deploy_prefix() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Absolute link to a booking page.
#[must_use]
pub fn view_href(view: View) -> String {
    join_prefix(deploy_prefix(), view.path())
}

/// `basename` for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_prefix(deploy_prefix())
}

fn join_prefix(prefix: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    match normalize_prefix(prefix) {
        Some(prefix) => format!("{prefix}/{path}"),
        None => format!("/{path}"),
    }
}

fn normalize_prefix(prefix: &str) -> Option<String> {
    let prefix = prefix.trim().trim_end_matches('/');
    (!prefix.is_empty()).then(|| prefix.to_string())
}
