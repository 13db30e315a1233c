// ── WiFi join QR rendering ──
//
// Renders the standard `WIFI:` join scheme as PNG bytes for the platform's
// image layer. The core supplies raw bytes only; presentation is the
// platform's job.

use std::io::Cursor;

use image::Luma;
use qrcode::QrCode;

use crate::error::CoreError;

/// Escape the characters the `WIFI:` scheme reserves.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build the `WIFI:` join string for an SSID.
///
/// `WIFI:T:WPA;S:<ssid>;P:<passphrase>;;` for protected networks,
/// `WIFI:T:nopass;S:<ssid>;;` for open ones.
pub fn wifi_join_string(ssid: &str, passphrase: Option<&str>) -> String {
    match passphrase {
        Some(pw) => format!("WIFI:T:WPA;S:{};P:{};;", escape(ssid), escape(pw)),
        None => format!("WIFI:T:nopass;S:{};;", escape(ssid)),
    }
}

/// Render a join QR code as PNG bytes.
pub fn join_qr_png(ssid: &str, passphrase: Option<&str>) -> Result<Vec<u8>, CoreError> {
    let content = wifi_join_string(ssid, passphrase);
    let code = QrCode::new(content.as_bytes())
        .map_err(|e| CoreError::Internal(format!("QR encoding failed: {e}")))?;

    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(200, 200)
        .build();

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("PNG encoding failed: {e}")))?;
    Ok(png)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

    #[test]
    fn join_string_escapes_reserved_characters() {
        assert_eq!(
            wifi_join_string("Cafe;Guest", Some("pass:word")),
            "WIFI:T:WPA;S:Cafe\\;Guest;P:pass\\:word;;"
        );
    }

    #[test]
    fn open_network_uses_nopass() {
        assert_eq!(wifi_join_string("Lobby", None), "WIFI:T:nopass;S:Lobby;;");
    }

    #[test]
    fn renders_png_bytes() {
        let png = join_qr_png("Guest", Some("hunter2hunter2")).unwrap();
        assert!(png.starts_with(PNG_MAGIC));
    }
}
