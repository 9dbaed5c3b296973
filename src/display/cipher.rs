//! Cipher list formatting

use crate::crypto::CipherInfo;

/// Format the registered ciphers as a name/description table
///
/// Rows keep registration order.
pub fn format_cipher_list(ciphers: &[CipherInfo]) -> String {
    let mut output = String::from("Supported Ciphers:\n");

    if ciphers.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    let name_width = ciphers
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(10);

    for cipher in ciphers {
        output.push_str(&format!(
            "{:>name_width$}  {}\n",
            cipher.name,
            cipher.description,
            name_width = name_width,
        ));
    }

    output
}
