/// The platform family of a UniFi controller.
///
/// The two families speak the same WLAN configuration API but differ in
/// login endpoint and URL prefix. The family is selected from configuration,
/// never auto-detected -- the caller knows what it deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPlatform {
    /// UniFi OS device (UDM, UCK Gen2+, etc.) -- port 443,
    /// `/proxy/network/` prefix, CSRF token required on mutations.
    UnifiOs,
    /// Standalone classic Network Application -- port 8443, no prefix.
    Classic,
}

impl ControllerPlatform {
    /// The path prefix for the network application API.
    pub fn api_prefix(self) -> &'static str {
        match self {
            Self::UnifiOs => "/proxy/network",
            Self::Classic => "",
        }
    }

    /// The login endpoint path.
    ///
    /// - UniFi OS: `POST /api/auth/login`
    /// - Classic: `POST /api/login`
    pub fn login_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/login",
            Self::Classic => "/api/login",
        }
    }

    /// The logout endpoint path.
    pub fn logout_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/logout",
            Self::Classic => "/api/logout",
        }
    }

    /// Build a site-scoped API path: `{prefix}/api/s/{site}/{endpoint}`.
    pub fn site_path(self, site: &str, endpoint: &str) -> String {
        format!("{}/api/s/{site}/{endpoint}", self.api_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_path_applies_prefix_per_family() {
        assert_eq!(
            ControllerPlatform::UnifiOs.site_path("default", "rest/wlanconf"),
            "/proxy/network/api/s/default/rest/wlanconf"
        );
        assert_eq!(
            ControllerPlatform::Classic.site_path("default", "rest/wlanconf"),
            "/api/s/default/rest/wlanconf"
        );
    }

    #[test]
    fn login_paths_differ_by_family() {
        assert_eq!(ControllerPlatform::UnifiOs.login_path(), "/api/auth/login");
        assert_eq!(ControllerPlatform::Classic.login_path(), "/api/login");
    }
}
