/// Link to a deployed application. `external_port` is either a bare port or
/// already `host:port`, depending on which endpoint produced it.
pub fn app_url(app_host: &str, external_port: &str) -> String {
    let port = external_port.trim();
    if port.starts_with("http://") || port.starts_with("https://") {
        return port.to_string();
    }
    if port.contains(':') || app_host.is_empty() {
        return format!("http://{}", port);
    }
    format!("http://{}:{}", app_host, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_port_uses_app_host() {
        assert_eq!(app_url("vano.my-wan", "8080"), "http://vano.my-wan:8080");
    }

    #[test]
    fn host_and_port_is_used_verbatim() {
        assert_eq!(app_url("vano.my-wan", "10.0.0.4:8080"), "http://10.0.0.4:8080");
        assert_eq!(app_url("x", "https://app.example.org"), "https://app.example.org");
    }
}
