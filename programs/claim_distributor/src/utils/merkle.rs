use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::hashv;

/// Hashes two nodes in ascending byte order.
///
/// Siblings are combined by value rather than by position, so a proof does
/// not need to carry left/right flags.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Recomputes the root from `leaf` and the sibling path and compares it with
/// `root`. An empty path verifies only when the leaf is the root.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}

/// Leaf committed for a claimant: hash(claimant ‖ amount ‖ index)
///
/// `index` is the claim number the leaf is valid for, starting at 1.
pub fn claim_leaf(claimant: &Pubkey, amount: u64, index: u64) -> [u8; 32] {
    hashv(&[
        claimant.as_ref(),
        &amount.to_le_bytes(),
        &index.to_le_bytes(),
    ])
    .to_bytes()
}

/// Replay-guard key: the hash of the whole path, nodes concatenated in order
pub fn proof_fingerprint(proof: &[[u8; 32]]) -> [u8; 32] {
    hashv(&[proof.concat().as_slice()]).to_bytes()
}
