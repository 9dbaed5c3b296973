//! `krypt list`: show the available ciphers

use crate::crypto::registry;
use crate::display::format_cipher_list;
use crate::error::KryptResult;

/// Print every registered cipher with its description
pub fn handle_list_command() -> KryptResult<()> {
    print!("{}", format_cipher_list(&registry::list_all()));
    Ok(())
}
