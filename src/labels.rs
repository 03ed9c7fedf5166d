//! Static table of known address labels.
//!
//! A curated override list of display names for well-known addresses
//! (framework modules, bridges, DEXes, lending protocols). Used to resolve
//! free-text queries like "pancake" to the addresses people mean.

// ============================================================================
// Known Addresses
// ============================================================================

/// Known address labels, canonical address form.
pub static KNOWN_ADDRESSES: &[(&str, &str)] = &[
    (
        "0x0000000000000000000000000000000000000000000000000000000000000001",
        "Framework (0x1)",
    ),
    (
        "0x0000000000000000000000000000000000000000000000000000000000000003",
        "Legacy Token (0x3)",
    ),
    (
        "0x0000000000000000000000000000000000000000000000000000000000000004",
        "Digital Assets (0x4)",
    ),
    (
        "0x000000000000000000000000000000000000000000000000000000000000000a",
        "Aptos Coin Fungible Asset",
    ),
    (
        "0xdcc43c54a666493b6cbfc1ecc81af0bc24e9b75c5ab3a7065c1fc9632ee8bd82",
        "GovScan Voting",
    ),
    // Aptos Labs
    (
        "0x867ed1f6bf916171b1de3ee92849b8978b7d1b9e0a8cc982a3d19d535dfd9c0c",
        "Aptos Name Service",
    ),
    (
        "0x915efe6647e0440f927d46e39bcb5eb040a7e567e1756e002073bc6e26f2cd23",
        "Aptos yr1: Graffio",
    ),
    (
        "0x96c192a4e3c529f0f6b3567f1281676012ce65ba4bb0a9b20b46dec4e371cccd",
        "Aptos yr2: NFT",
    ),
    (
        "0xee443c3b5ae14baaee87ea410a4badba1227dae386a616936aad88d053849638",
        "Aptos Hongbao",
    ),
    // Bridges
    (
        "0x5bc11445584a763c1fa7ed39081f1b920954da14e04b32440cba863d03e19625",
        "Wormhole Bridge",
    ),
    (
        "0x576410486a2da45eee6c949c995670112ddf2fbeedab20350d506328eefc9d4f",
        "Wormhole Token",
    ),
    (
        "0x54ad3d30af77b60d939ae356e6606de9a4da67583f02b962d2d3f2e481484e90",
        "LayerZero Bridge",
    ),
    (
        "0xf22bede237a07e121b56d91a491eb7bcdfd1f5907926a9e58338f964a01b17fa",
        "LayerZero Token",
    ),
    (
        "0x8d87a65ba30e09357fa2edea2c80dbac296e5dec2b18287113500b902942929d",
        "Celer Bridge",
    ),
    // DEX
    (
        "0xc7efb4076dbe143cbcd98cfaaa929ecfc8f299203dfff63b95ccb6bfe19850fa",
        "PancakeSwap",
    ),
    (
        "0x48271d39d0b05bd6efca2278f22277d6fcc375504f9839fd73f74ace240861af",
        "ThalaSwap v1",
    ),
    (
        "0x007730cd28ee1cdc9e999336cbc430f99e7c44397c0aa77516f6f23a78559bb5",
        "ThalaSwap v2",
    ),
    (
        "0x6b3720cd988adeaf721ed9d4730da4324d52364871a68eac62b46d21e4d2fa99",
        "Thala Farm",
    ),
    (
        "0x190d44266241744264b964a37b8f09863167a12d3e70cda39376cfb4e3561e12",
        "LiquidSwap v0",
    ),
    (
        "0x0163df34fccbf003ce219d3f1d9e70d140b60622cb9dd47599c25fb2f797ba6e",
        "LiquidSwap v0.5",
    ),
    (
        "0x54cb0bb2c18564b86e34539b9f89cfe1186e39d89fce54e1cd007b8e61673a85",
        "LiquidSwap v1",
    ),
    (
        "0xb247ddeee87e848315caf9a33b8e4c71ac53db888cb88143d62d2370cca0ead2",
        "LiquidSwap v1 Farms",
    ),
    (
        "0x80273859084bc47f92a6c2d3e9257ebb2349668a1b0fb3db1d759a04c7628855",
        "LiquidSwap router",
    ),
    (
        "0x31a6675cbe84365bf2b0cbce617ece6c47023ef70826533bde5203d32171dc3c",
        "SushiSwap",
    ),
    (
        "0xa5d3ac4d429052674ed38adc62d010e52d7c24ca159194d17ddc196ddb7e480b",
        "AptoSwap",
    ),
    (
        "0xbd35135844473187163ca197ca93b2ab014370587bb0ed3befff9e902d6bb541",
        "AuxExchange",
    ),
    (
        "0x4bf51972879e3b95c4781a5cdcb9e1ee24ef483e7d22f2d903626f126df62bd1",
        "Cellana Finance",
    ),
    (
        "0xea098f1fa9245447c792d18c069433f5da2904358e1e340c55bdc68a8f5fe037",
        "Cellana Rewards",
    ),
    (
        "0x1c3206329806286fd2223647c9f9b130e66baeb6d7224a18c1f642ffe48f3b4c",
        "Panora Exchange",
    ),
    (
        "0x9538c839fe490ccfaf32ad9f7491b5e84e610ff6edc110ff883f06ebde82463d",
        "KanaLabs",
    ),
    (
        "0xc0deb00c405f84c85dc13442e305df75d1288100cdd82675695f6148c7ece51c",
        "Econia Labs",
    ),
    (
        "0x8b4a2c4bb53857c718a04c020b98f8c2e1f99a68b0f57389a8bf5434cd22e05c",
        "Hyperion",
    ),
    (
        "0x487e905f899ccb6d46fdaec56ba1e0c4cf119862a16c409904b8c78fab1f5e8a",
        "Tapp Exchange",
    ),
    (
        "0x16fe2df00ea7dde4a63409201f7f4e536bde7bb7335526a35d05111e68aa322c",
        "AnimeSwap",
    ),
    // Lending
    (
        "0x9770fa9c725cbd97eb50b2be5f7416efdfd1f1554beb0750d4dae4c64e860da3",
        "Aries Markets",
    ),
];

// ============================================================================
// Fuzzy Matching
// ============================================================================

/// Minimum query length (in characters) for substring matching.
///
/// Shorter queries must match exactly, which prevents one- and
/// two-character inputs from flooding the results.
const FUZZY_MIN_CHARS: usize = 3;

/// The shared search match rule for names in curated tables.
///
/// `query_lower` must already be lowercased. Queries of at least three
/// characters match any case-insensitive substring of the candidate;
/// shorter queries only match the candidate exactly.
#[must_use]
pub fn fuzzy_label_match(query_lower: &str, candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    let candidate_lower = candidate.to_lowercase();
    if query_lower.chars().count() >= FUZZY_MIN_CHARS {
        candidate_lower.contains(query_lower)
    } else {
        candidate_lower == query_lower
    }
}

/// All known-address entries whose label matches the query.
#[must_use]
pub fn matching_labels(query: &str) -> Vec<(&'static str, &'static str)> {
    let query_lower = query.to_lowercase();
    KNOWN_ADDRESSES
        .iter()
        .filter(|(_, label)| fuzzy_label_match(&query_lower, label))
        .copied()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
