// ============================================================================
// WETH9 Table
// Canonical wrapped-ether deployments by chain
// ============================================================================

use super::currency::{ChainId, Token};

const WETH9_ADDRESSES: [(ChainId, &str); 9] = [
    (1, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
    (3, "0xc778417E063141139Fce010982780140Aa0cD5Ab"),
    (4, "0xc778417E063141139Fce010982780140Aa0cD5Ab"),
    (5, "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
    (42, "0xd0A1E359811322d97991E03f863a0C30C2cF029C"),
    (10, "0x4200000000000000000000000000000000000006"),
    (69, "0x4200000000000000000000000000000000000006"),
    (42161, "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
    (421611, "0xB47e6A5f8b33b3F17603C83a0535A9dcD7E32681"),
];

/// Wrapped ether on `chain_id`, if deployed there.
pub fn weth9(chain_id: ChainId) -> Option<Token> {
    WETH9_ADDRESSES
        .iter()
        .find(|(chain, _)| *chain == chain_id)
        .map(|(chain, address)| {
            Token::new_unchecked(*chain, *address, 18)
                .with_symbol("WETH")
                .with_name("Wrapped Ether")
        })
}

/// Chains with a known WETH9 deployment.
pub fn supported_chains() -> impl Iterator<Item = ChainId> {
    WETH9_ADDRESSES.iter().map(|(chain, _)| *chain)
}
