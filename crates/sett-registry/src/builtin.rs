/// (sett token, display name, asset symbol)
pub(crate) const BADGER_MAINNET_SETTS: &[(&str, &str, &str)] = &[
    (
        "0x6dEf55d2e18486B9dDfaA075bc4e4EE0B28c1545",
        "Curve.fi renBTC/wBTC",
        "renCrv",
    ),
    (
        "0xd04c48A53c111300aD41190D63681ed3dAd998eC",
        "Curve.fi renBTC/wBTC/sBTC",
        "sbtcCrv",
    ),
    (
        "0xb9D076fDe463dbc9f915E5392F807315Bf940334",
        "Curve.fi tBTC/sbtcCrv",
        "tbtcCrv",
    ),
    (
        "0x19D97D8fA813EE2f51aD4B4e04EA08bAf4DFfC28",
        "Badger",
        "BADGER",
    ),
    (
        "0x235c9e24D3FB2FAFd58a2E49D454Fdcd2DBf7FF1",
        "Uniswap Wrapped BTC/Badger",
        "BADGER-WBTC",
    ),
    (
        "0x758A43EE2BFf8230eeb784879CdcFF4828F2544D",
        "Sushiswap Wrapped BTC/Wrapped Ether",
        "SLP-WBTC-WETH",
    ),
    ("0x7e7E112A68d8D2E221E11047a72fFC1065c38e1a", "Digg", "DIGG"),
];
