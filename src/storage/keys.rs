use rand::rngs::OsRng;
use rand::RngCore;

pub struct KeyManager;

impl KeyManager {
    /// Generate a fresh demo identity.
    ///
    /// Addresses are `0x` + 40 lowercase hex chars (160 bits), private keys
    /// `0x` + 64 lowercase hex chars (256 bits). The randomness is OS-backed
    /// so identifiers look realistic, but nothing here can sign anything.
    pub fn generate() -> WalletKeys {
        WalletKeys {
            address: format!("0x{}", rand_hex(20)),
            private_key: format!("0x{}", rand_hex(32)),
        }
    }
}

fn rand_hex(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

pub struct WalletKeys {
    pub address: String,
    pub private_key: String,
}
