//! Registry of investable assets the price supplier covers.

/// Broad grouping used for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Crypto,
    Equity,
    Bond,
    Commodity,
    Reit,
    Thematic,
}

impl AssetCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetCategory::Crypto => "Cryptocurrency",
            AssetCategory::Equity => "Global Equity",
            AssetCategory::Bond => "Fixed Income",
            AssetCategory::Commodity => "Commodities",
            AssetCategory::Reit => "Real Estate",
            AssetCategory::Thematic => "Thematic & Sector",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AssetCategory,
    pub unit: &'static str,
}

/// All assets the collector tracks. The engine treats the id as opaque; this
/// table only backs CLI listing and identifier validation at the boundary.
pub const ASSET_REGISTRY: &[AssetDefinition] = &[
    AssetDefinition { id: "BTC", name: "Bitcoin", category: AssetCategory::Crypto, unit: "BTC" },
    AssetDefinition { id: "ETH", name: "Ethereum", category: AssetCategory::Crypto, unit: "ETH" },
    AssetDefinition { id: "BNB", name: "BNB", category: AssetCategory::Crypto, unit: "BNB" },
    AssetDefinition { id: "SOL", name: "Solana", category: AssetCategory::Crypto, unit: "SOL" },
    AssetDefinition { id: "XRP", name: "XRP", category: AssetCategory::Crypto, unit: "XRP" },
    AssetDefinition { id: "LTC", name: "Litecoin", category: AssetCategory::Crypto, unit: "LTC" },
    AssetDefinition {
        id: "VWRA",
        name: "Vanguard FTSE All-World UCITS ETF",
        category: AssetCategory::Equity,
        unit: "shares",
    },
    AssetDefinition {
        id: "IWDA",
        name: "iShares Core MSCI World UCITS ETF",
        category: AssetCategory::Equity,
        unit: "shares",
    },
    AssetDefinition {
        id: "VT",
        name: "Vanguard Total World Stock ETF",
        category: AssetCategory::Equity,
        unit: "shares",
    },
    AssetDefinition {
        id: "CSPX",
        name: "iShares Core S&P 500 UCITS ETF",
        category: AssetCategory::Equity,
        unit: "shares",
    },
    AssetDefinition {
        id: "VTI",
        name: "Vanguard Total Stock Market ETF",
        category: AssetCategory::Equity,
        unit: "shares",
    },
    AssetDefinition {
        id: "EXSA",
        name: "iShares STOXX Europe 600 UCITS ETF",
        category: AssetCategory::Equity,
        unit: "shares",
    },
    AssetDefinition {
        id: "VWO",
        name: "Vanguard FTSE Emerging Markets ETF",
        category: AssetCategory::Equity,
        unit: "shares",
    },
    AssetDefinition {
        id: "BND",
        name: "Vanguard Total Bond Market ETF",
        category: AssetCategory::Bond,
        unit: "shares",
    },
    AssetDefinition {
        id: "EMB",
        name: "iShares J.P. Morgan USD EM Bond ETF",
        category: AssetCategory::Bond,
        unit: "shares",
    },
    AssetDefinition {
        id: "GLD",
        name: "SPDR Gold Shares",
        category: AssetCategory::Commodity,
        unit: "shares",
    },
    AssetDefinition {
        id: "DBC",
        name: "Invesco DB Commodity Index Tracking Fund",
        category: AssetCategory::Commodity,
        unit: "shares",
    },
    AssetDefinition {
        id: "VNQ",
        name: "Vanguard Real Estate ETF",
        category: AssetCategory::Reit,
        unit: "shares",
    },
    AssetDefinition {
        id: "QQQ",
        name: "Invesco QQQ Trust",
        category: AssetCategory::Thematic,
        unit: "shares",
    },
    AssetDefinition {
        id: "ICLN",
        name: "iShares Global Clean Energy ETF",
        category: AssetCategory::Thematic,
        unit: "shares",
    },
    AssetDefinition {
        id: "VHYL",
        name: "Vanguard FTSE All-World High Dividend Yield ETF",
        category: AssetCategory::Thematic,
        unit: "shares",
    },
];

/// Case-insensitive lookup by id.
pub fn lookup(id: &str) -> Option<&'static AssetDefinition> {
    ASSET_REGISTRY
        .iter()
        .find(|a| a.id.eq_ignore_ascii_case(id))
}
