//! Insight catalog
//!
//! The editorial feed is generated in memory, synchronously and
//! deterministically, in editorial order. The saved-insights view filters
//! this list by bookmark membership and inherits its ordering.

use chrono::NaiveDate;

use crate::domain::models::InsightPost;

struct Seed {
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    badge_color: Option<&'static str>,
    published: (i32, u32, u32),
    read_minutes: u32,
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Bitcoin Halving: What History Tells Us",
        excerpt: "Every halving has reshaped miner economics and supply flow. A look at the three previous cycles and what changed this time.",
        category: "Markets",
        badge_color: Some("#f7931a"),
        published: (2025, 6, 2),
        read_minutes: 8,
    },
    Seed {
        title: "Layer-2 Rollups, Explained Without the Jargon",
        excerpt: "Optimistic and zero-knowledge rollups both promise cheaper transactions. Here is how they actually differ in practice.",
        category: "Technology",
        badge_color: Some("#6366f1"),
        published: (2025, 5, 28),
        read_minutes: 11,
    },
    Seed {
        title: "Stablecoin Regulation Heats Up in the EU",
        excerpt: "MiCA enforcement is changing which tokens exchanges can list. What issuers and holders need to know this quarter.",
        category: "Regulation",
        badge_color: Some("#0ea5e9"),
        published: (2025, 5, 19),
        read_minutes: 7,
    },
    Seed {
        title: "Cold Storage Setups That Survive You Losing a Device",
        excerpt: "Hardware wallets fail, seed phrases burn. Redundancy patterns that keep self-custody recoverable without weakening it.",
        category: "Security",
        badge_color: Some("#dc2626"),
        published: (2025, 5, 11),
        read_minutes: 9,
    },
    Seed {
        title: "Reading On-Chain Flows Before the Market Does",
        excerpt: "Exchange inflows, dormant supply waking up, whale clustering. The handful of on-chain signals worth your attention.",
        category: "Markets",
        badge_color: Some("#f7931a"),
        published: (2025, 4, 30),
        read_minutes: 10,
    },
    Seed {
        title: "DeFi Yield: Where the APY Actually Comes From",
        excerpt: "If you cannot name the source of the yield, you are the source. A taxonomy of sustainable and reflexive yields.",
        category: "DeFi",
        badge_color: Some("#16a34a"),
        published: (2025, 4, 22),
        read_minutes: 12,
    },
    Seed {
        title: "The Quiet Comeback of Bitcoin Ordinals",
        excerpt: "Inscription volume is back near its 2024 peak while fees stay flat. What changed under the hood.",
        category: "Technology",
        badge_color: None,
        published: (2025, 4, 10),
        read_minutes: 6,
    },
    Seed {
        title: "Tax Season for Traders: A Field Guide",
        excerpt: "Lot selection, wash-sale gray zones, staking income. The questions to settle before filing, jurisdiction by jurisdiction.",
        category: "Regulation",
        badge_color: Some("#0ea5e9"),
        published: (2025, 3, 29),
        read_minutes: 14,
    },
    Seed {
        title: "Restaking and the New Risk Stack",
        excerpt: "Shared security sounds free until slashing cascades. Mapping the dependencies restaking quietly introduces.",
        category: "DeFi",
        badge_color: Some("#16a34a"),
        published: (2025, 3, 17),
        read_minutes: 9,
    },
    Seed {
        title: "What a Spot ETF Decade Could Look Like",
        excerpt: "Flows, custody concentration and the changing shape of weekend liquidity after eighteen months of ETF trading.",
        category: "Markets",
        badge_color: None,
        published: (2025, 3, 5),
        read_minutes: 8,
    },
];

/// Generate the full insight catalog. Ids are stable (`post-1` ...) so
/// bookmarks persisted remotely keep resolving across sessions.
pub fn generate_insight_posts() -> Vec<InsightPost> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let (year, month, day) = seed.published;
            InsightPost {
                id: format!("post-{}", index + 1),
                title: seed.title.to_string(),
                excerpt: seed.excerpt.to_string(),
                category: seed.category.to_string(),
                image: format!("/assets/insights/post-{}.jpg", index + 1),
                badge_color: seed.badge_color.map(str::to_string),
                published: NaiveDate::from_ymd_opt(year, month, day)
                    .expect("catalog seed dates are valid"),
                read_minutes: seed.read_minutes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sequential_ids() {
        let posts = generate_insight_posts();
        assert_eq!(posts.len(), 10);
        for (index, post) in posts.iter().enumerate() {
            assert_eq!(post.id, format!("post-{}", index + 1));
        }
    }

    #[test]
    fn test_catalog_is_deterministic() {
        assert_eq!(generate_insight_posts(), generate_insight_posts());
    }

    #[test]
    fn test_catalog_entries_are_presentable() {
        for post in generate_insight_posts() {
            assert!(!post.title.is_empty());
            assert!(!post.excerpt.is_empty());
            assert!(!post.category.is_empty());
            assert!(post.read_minutes > 0);
        }
    }
}
