/// Underlying tokens of the built-in mainnet setts, quoted when no explicit
/// token list is configured.
pub const BADGER_MAINNET_PRICE_TOKENS: &[&str] = &[
    // crvRenWBTC
    "0x49849C98ae39Fff122806C06791Fa73784FB3675",
    // crvRenWSBTC
    "0x075b1bb99792c9E1041bA13afEf80C91a1e70fB3",
    // tbtc/sbtcCrv
    "0x64eda51d3Ad40D56b9dFc5554E06F94e1Dd786Fd",
    // BADGER
    "0x3472A5A71965499acd81997a54BBA8D852C6E53d",
    // UNI-V2 WBTC/BADGER
    "0xcD7989894bc033581532D2cd88Da5db0A4b12859",
    // SLP WBTC/WETH
    "0xCEfF51756c56CeFFCA006cD410B03FFC46dd3a58",
    // DIGG
    "0x798D1bE841a82a273720CE31c822C61a67a601C3",
];

pub fn badger_mainnet_price_tokens() -> Vec<String> {
    BADGER_MAINNET_PRICE_TOKENS
        .iter()
        .map(|token| (*token).to_string())
        .collect()
}
