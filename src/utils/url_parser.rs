/// Extract hostname (with port, if any) from a URL string
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    if s.is_empty() {
        return "".into();
    }
    let s = if let Some(idx) = s.find("://") { &s[idx+3..] } else { s };
    let host = s.split('/').next().unwrap_or(s);
    host.to_string()
}

/// Host part of a URL without its port.
pub fn host_without_port(u: &str) -> String {
    let host = hostname_from_url(u);
    if host.starts_with('[') {
        // IPv6 literal: keep the brackets, drop what follows them
        return host.split_inclusive(']').next().unwrap_or(&host).to_string();
    }
    host.split(':').next().unwrap_or(&host).to_string()
}
