use std::time::Duration;

/// A purchasable credit bundle. Catalog entries are read-only reference
/// data; the "purchase" against them is simulated end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub credits: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const CATALOG: [Tier; 3] = [
    Tier {
        id: "starter",
        name: "Starter",
        price: "$9.99",
        credits: 50,
        features: &[
            "50 analysis credits",
            "Video and idea audits",
            "Scene scripts",
        ],
        popular: false,
    },
    Tier {
        id: "creator",
        name: "Creator",
        price: "$24.99",
        credits: 200,
        features: &[
            "200 analysis credits",
            "Everything in Starter",
            "Priority processing",
        ],
        popular: true,
    },
    Tier {
        id: "agency",
        name: "Agency",
        price: "$79.99",
        credits: 1000,
        features: &[
            "1000 analysis credits",
            "Everything in Creator",
            "Team workflows",
        ],
        popular: false,
    },
];

/// Fixed delay the simulated checkout waits before granting credits.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

pub fn tier(id: &str) -> Option<&'static Tier> {
    CATALOG.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_lookup_by_id() {
        assert_eq!(tier("creator").unwrap().credits, 200);
        assert!(tier("enterprise").is_none());
    }

    #[test]
    fn exactly_one_tier_is_popular() {
        assert_eq!(CATALOG.iter().filter(|t| t.popular).count(), 1);
    }

    #[test]
    fn every_tier_grants_credits_and_lists_features() {
        for t in &CATALOG {
            assert!(t.credits > 0);
            assert!(!t.features.is_empty());
        }
    }
}
