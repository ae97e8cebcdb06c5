use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

/// Reads the password from `SALTMILL_PASSWORD`, a pipe on stdin, or a
/// TTY prompt, in that order.
pub fn read_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("SALTMILL_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = if io::stdin().is_terminal() {
        Zeroizing::new(rpassword::prompt_password("Password: ")?)
    } else {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut buf)?;
        Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string())
    };

    if pw.is_empty() {
        bail!("No password provided");
    }
    Ok(pw)
}
