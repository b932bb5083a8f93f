use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seed strings shared by the instruction contexts and the off-chain
 * tooling that derives the same addresses.
 */

#[constant]
/// Seed for the distributor PDA
/// - Used in: ["distributor", token_mint, base]
/// - `base` is the creating key and never changes, so ownership transfer
///   does not move the account
pub const DISTRIBUTOR_SEED: &str = "distributor";

#[constant]
/// Seed for the token vault PDA
/// - Used in: ["vault", distributor_key]
/// - The vault authority is the distributor PDA itself
pub const VAULT_SEED: &str = "vault";

#[constant]
/// Seed for the per-claimant nonce PDA
/// - Used in: ["nonce", distributor_key, claimant_key]
pub const NONCE_SEED: &str = "nonce";

#[constant]
/// Seed for the proof receipt PDA (replay guard)
/// - Used in: ["proof", distributor_key, proof_fingerprint]
/// - Keyed by the hash of the whole sibling path, not by claimant
pub const PROOF_SEED: &str = "proof";
