//! Demo samples for the gallery

use samples_common::SampleItem;

/// (title, description, languages, domains, level, content type, url)
type SampleRow = (
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static str,
    &'static str,
    Option<&'static str>,
);

const SAMPLES: &[SampleRow] = &[
    (
        "Hello World",
        "Deploy a minimal canister and call it from the command line.",
        &["Motoko", "Rust"],
        &["Global"],
        "Beginner",
        "Code Samples",
        Some("/samples/hello-world"),
    ),
    (
        "Counter",
        "Persist a counter across upgrades using stable memory.",
        &["Motoko"],
        &["Global"],
        "Beginner",
        "Code Samples",
        None,
    ),
    (
        "Static Website",
        "Host a static site from an asset canister.",
        &["Javascript"],
        &["Website"],
        "Beginner",
        "Documentation",
        None,
    ),
    (
        "Token Transfer",
        "Send ledger tokens between accounts from a backend canister.",
        &["Rust", "Motoko"],
        &["DeFi"],
        "Intermediate",
        "Code Samples",
        None,
    ),
    (
        "Decentralized Exchange",
        "Order book exchange with deposits, withdrawals and trading.",
        &["Motoko", "Javascript"],
        &["DeFi"],
        "Advanced",
        "Live Demos",
        None,
    ),
    (
        "NFT Minting",
        "Mint and transfer non-fungible tokens with a simple frontend.",
        &["Rust"],
        &["NFT"],
        "Intermediate",
        "Videos",
        None,
    ),
    (
        "Multiplayer Tic-Tac-Toe",
        "Turn-based game state stored entirely on chain.",
        &["Javascript", "Motoko"],
        &["Gaming"],
        "Intermediate",
        "Live Demos",
        None,
    ),
    (
        "Threshold ECDSA Signing",
        "Sign messages with a key no single node ever holds.",
        &["Rust"],
        &["DeFi", "Global"],
        "Advanced",
        "Documentation",
        None,
    ),
    (
        "Photo Storage",
        "Upload images in chunks and serve them over HTTP.",
        &["Rust", "Javascript"],
        &["Website"],
        "Intermediate",
        "Code Samples",
        None,
    ),
    (
        "Leaderboard",
        "Rank players and expose scores to game clients.",
        &["Motoko"],
        &["Gaming"],
        "Beginner",
        "Videos",
        None,
    ),
    (
        "NFT Marketplace",
        "List, bid on and settle NFT sales.",
        &["Motoko", "Javascript"],
        &["NFT", "DeFi"],
        "Advanced",
        "Videos",
        None,
    ),
    (
        "HTTPS Outcalls",
        "Fetch exchange rates from a web API inside a canister.",
        &["Rust", "Motoko"],
        &["Global", "DeFi"],
        "Intermediate",
        "Documentation",
        None,
    ),
];

pub fn get_samples() -> Vec<SampleItem> {
    SAMPLES
        .iter()
        .enumerate()
        .map(
            |(i, (title, description, languages, domains, level, content_type, url))| SampleItem {
                id: format!("sample-{}", i + 1),
                title: title.to_string(),
                description: description.to_string(),
                languages: languages.to_vec(),
                domains: domains.to_vec(),
                level: *level,
                content_type: *content_type,
                url: url.map(str::to_string),
            },
        )
        .collect()
}
