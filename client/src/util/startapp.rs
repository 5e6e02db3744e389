use serde::Deserialize;

/// Query/fragment parameter Telegram uses to deliver the start token.
pub const START_PARAM: &str = "tgWebAppStartParam";

/// The slice of the host's init payload this client reads
/// (`initDataUnsafe` in the Telegram WebApp object).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitPayload {
    #[serde(default)]
    pub start_param: Option<String>,
}

/// Extract the deep-link start token used to bootstrap an authenticated
/// session without a login form.
///
/// Three sources are tried in priority order: the launch URL's query
/// string, its fragment, then the host init payload. The first non-empty
/// candidate wins; the winner is trimmed and a whitespace-only winner
/// counts as absent.
pub fn start_app_token(launch_url: &str, init: Option<&InitPayload>) -> Option<String> {
    let (base, fragment) = match launch_url.split_once('#') {
        Some((base, fragment)) => (base, fragment),
        None => (launch_url, ""),
    };
    let query = base.split_once('?').map(|(_, q)| q).unwrap_or("");

    param_from(query, START_PARAM)
        .or_else(|| param_from(fragment, START_PARAM))
        .or_else(|| {
            init.and_then(|i| i.start_param.clone())
                .filter(|s| !s.is_empty())
        })
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn param_from(encoded: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(encoded.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
