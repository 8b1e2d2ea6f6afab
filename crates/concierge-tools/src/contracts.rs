//! Declared contract of every tool.

use concierge_core::config::CacheConfig;
use concierge_core::{CachePolicy, InputKind, ToolContract, ToolName};

pub fn contract_for(tool: ToolName, cache: &CacheConfig) -> ToolContract {
    let (description, input, policy) = match tool {
        ToolName::StaticFacts => (
            "Unchanging facts about the college: personnel, location, timings, history, accreditation.",
            InputKind::Query,
            CachePolicy::Static,
        ),
        ToolName::LatestNotices => (
            "Latest notices and announcements from the college website.",
            InputKind::None,
            CachePolicy::Dynamic { ttl_secs: cache.notices_ttl_secs },
        ),
        ToolName::Placements => (
            "Placement information from the college website.",
            InputKind::None,
            CachePolicy::Dynamic { ttl_secs: cache.placements_ttl_secs },
        ),
        ToolName::Database => (
            "Aggregate placement statistics. Individual student data is never returned.",
            InputKind::Query,
            CachePolicy::Dynamic { ttl_secs: cache.database_ttl_secs },
        ),
        ToolName::StudentPortal => (
            "Personal results and dashboard data from the student portal. Requires login.",
            InputKind::CredentialsAndQuery,
            CachePolicy::Dynamic { ttl_secs: cache.portal_ttl_secs },
        ),
        ToolName::WebSearch => (
            "Free-text search over the indexed college website.",
            InputKind::Query,
            CachePolicy::Dynamic { ttl_secs: cache.search_ttl_secs },
        ),
    };

    ToolContract {
        name: tool,
        description: description.to_string(),
        input,
        cache: policy,
        idempotent: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttls_per_tool() {
        let cache = CacheConfig::default();
        assert_eq!(contract_for(ToolName::StaticFacts, &cache).cache, CachePolicy::Static);
        assert_eq!(
            contract_for(ToolName::StudentPortal, &cache).cache,
            CachePolicy::Dynamic { ttl_secs: 300 }
        );
        for tool in [
            ToolName::LatestNotices,
            ToolName::Placements,
            ToolName::Database,
            ToolName::WebSearch,
        ] {
            assert_eq!(
                contract_for(tool, &cache).cache,
                CachePolicy::Dynamic { ttl_secs: 3600 }
            );
        }
    }

    #[test]
    fn portal_needs_credentials() {
        let c = contract_for(ToolName::StudentPortal, &CacheConfig::default());
        assert_eq!(c.input, InputKind::CredentialsAndQuery);
    }
}
