use super::domain::RemoteType;

/// Infer the work mode from free-text location. `hybrid` takes precedence over `remote`;
/// anything else is onsite.
pub fn classify_location(location: &str) -> RemoteType {
    let normalized = location.to_lowercase();
    if normalized.contains("hybrid") {
        RemoteType::Hybrid
    } else if normalized.contains("remote") {
        RemoteType::Remote
    } else {
        RemoteType::Onsite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybrid_wins_over_remote() {
        assert_eq!(
            classify_location("Remote or Hybrid (Austin)"),
            RemoteType::Hybrid
        );
        assert_eq!(classify_location("HYBRID - remote 2 days"), RemoteType::Hybrid);
    }

    #[test]
    fn remote_matches_case_insensitively() {
        assert_eq!(classify_location("Remote - US"), RemoteType::Remote);
        assert_eq!(classify_location("fully REMOTE"), RemoteType::Remote);
        assert_eq!(classify_location("Remotely, Canada"), RemoteType::Remote);
    }

    #[test]
    fn everything_else_is_onsite() {
        assert_eq!(classify_location("San Francisco, CA"), RemoteType::Onsite);
        assert_eq!(classify_location(""), RemoteType::Onsite);
        assert_eq!(classify_location("Rem ote, Hy brid"), RemoteType::Onsite);
    }
}
