use zhmac::boundary::{self, ArrayBuffer};
use zhmac::{hmac_sha1, sha1};

fn hex(b: &[u8]) -> String {
    b.iter().map(|b| format!("{:02x}", b)).collect()
}

fn main() {
    println!("sha1(\"\")    = {}", hex(&sha1(b"")));
    println!("sha1(\"abc\") = {}", hex(&sha1(b"abc")));
    println!(
        "hmac_sha1(\"key\", fox) = {}",
        hex(&hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog"))
    );

    // RFC 2202 test case 1, by way of the host boundary.
    let key = ArrayBuffer::from([0x0bu8; 20]);
    let data = ArrayBuffer::from(&b"Hi There"[..]);
    match boundary::hmac_sha1(Some(&key), Some(&data)) {
        Ok(mac) => println!("hmac_sha1(0x0b * 20, \"Hi There\") = {}", hex(mac.as_bytes())),
        Err(e) => println!("ERROR {}", e),
    }
    if let Err(e) = boundary::hmac_sha1(None, Some(&data)) {
        println!("null key rejected: {}", e);
    }
}
