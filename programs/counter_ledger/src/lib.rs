#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

mod contexts;
pub mod error;
pub mod state;
pub mod utils;

use contexts::*;

declare_id!("GQ61yFy7WV7oen2dWvUjpDAYPAxhuZcUZAShh8WScXu2");

/// The only identity allowed to create or close the global account.
#[cfg(feature = "mainnet")]
pub const ADMIN: Pubkey = pubkey!("4ndmLd7zdcvXz9T3VrNeQaX6Tz3jGhmB93UZwqcMLen8");

/// Localnet admin. Its keypair is derived from the 32-byte seed `[7; 32]`.
#[cfg(not(feature = "mainnet"))]
pub const ADMIN: Pubkey = pubkey!("GmaDrppBC7P5ARKV8g3djiwP89vz1jLK23V2GBjuAEGB");

#[program]
pub mod counter_ledger {
    use super::*;

    // Create the user PDA for the signing wallet
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        Initialize::process(ctx)
    }

    // Create the global PDA (admin only, once)
    pub fn initialize_global(ctx: Context<InitializeGlobal>) -> Result<()> {
        InitializeGlobal::process(ctx)
    }

    // Bump the caller's counter and the global counter together
    pub fn increment(ctx: Context<Increment>) -> Result<()> {
        Increment::process(ctx)
    }

    // Close the caller's user PDA and refund rent to them
    pub fn close(ctx: Context<CloseUserAccount>) -> Result<()> {
        CloseUserAccount::process(ctx)
    }

    // Close the global PDA (admin only)
    pub fn close_global(ctx: Context<CloseGlobalAccount>) -> Result<()> {
        CloseGlobalAccount::process(ctx)
    }
}
