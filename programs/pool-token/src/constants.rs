pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDING_SEED: &[u8] = b"holding";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Version string bound into every domain separator
pub const VERSION: &str = "1";

pub const DOMAIN_TYPE: &[u8] =
    b"Domain(string name,string version,u64 chainId,pubkey program,pubkey ledger)";
pub const PERMIT_TYPE: &[u8] =
    b"Permit(pubkey owner,pubkey spender,u64 value,u64 nonce,i64 deadline)";
