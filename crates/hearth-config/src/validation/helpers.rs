//! Building blocks for the section validators.

/// Record `name` if `value` falls outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Record `name` unless `url` is an http(s) URL with a host part.
pub(crate) fn validate_http_url(errors: &mut Vec<String>, name: &str, url: &str) {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match rest {
        None => errors.push(format!(
            "{name} = {url:?} must start with http:// or https://"
        )),
        Some(rest) if rest.trim_matches('/').is_empty() => {
            errors.push(format!("{name} = {url:?} has no host"))
        }
        Some(_) => {}
    }
}
