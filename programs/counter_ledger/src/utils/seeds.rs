pub const SEED_USER_ACCOUNT: &[u8] = b"user_account";
pub const SEED_GLOBAL_ACCOUNT: &[u8] = b"global_account";
