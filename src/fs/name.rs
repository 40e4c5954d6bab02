//! 8.3 short name reconstruction.

/// Width of the raw name field: 8 bytes base, 3 bytes extension.
pub const NAME_LEN: usize = 11;
const BASE_LEN: usize = 8;

/// Marker for a free slot that ends the directory.
pub const SLOT_FREE: u8 = 0x00;
/// Marker for a deleted slot.
pub const SLOT_DELETED: u8 = 0xE5;
/// Stored in place of a leading 0xE5 so the entry is not taken as deleted.
const KANJI_LEAD: u8 = 0x05;

/// Rebuild the display name as raw OEM bytes.
///
/// Each half ends at its first space. An empty extension drops the dot.
pub fn decode_raw_name(raw: &[u8; NAME_LEN]) -> Vec<u8> {
    if raw[0] == SLOT_FREE {
        return Vec::new();
    }

    let mut field = *raw;
    if field[0] == KANJI_LEAD {
        field[0] = SLOT_DELETED;
    }

    let (base, ext) = field.split_at(BASE_LEN);
    let base = until_space(base);
    let ext = until_space(ext);

    let mut name = Vec::with_capacity(NAME_LEN + 1);
    name.extend_from_slice(base);
    if !ext.is_empty() {
        name.push(b'.');
        name.extend_from_slice(ext);
    }
    name
}

/// Rebuild the display name, mapping bytes 0x80-0xFF through CP437.
pub fn decode_name(raw: &[u8; NAME_LEN]) -> String {
    decode_oem_string(&decode_raw_name(raw))
}

fn until_space(segment: &[u8]) -> &[u8] {
    match segment.iter().position(|&b| b == b' ') {
        Some(end) => &segment[..end],
        None => segment,
    }
}

/// Decode a byte slice from OEM codepage (CP437) to a UTF-8 String.
pub fn decode_oem_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| cp437_to_char(b)).collect()
}

fn cp437_to_char(b: u8) -> char {
    if b < 0x80 {
        b as char
    } else {
        CP437_HIGH[b as usize - 0x80]
    }
}

#[rustfmt::skip]
const CP437_HIGH: [char; 128] = [
    // 0x80-0x8F
    'Ç','ü','é','â','ä','à','å','ç', 'ê','ë','è','ï','î','ì','Ä','Å',
    // 0x90-0x9F
    'É','æ','Æ','ô','ö','ò','û','ù', 'ÿ','Ö','Ü','¢','£','¥','₧','ƒ',
    // 0xA0-0xAF
    'á','í','ó','ú','ñ','Ñ','ª','º', '¿','⌐','¬','½','¼','¡','«','»',
    // 0xB0-0xBF
    '░','▒','▓','│','┤','╡','╢','╖', '╕','╣','║','╗','╝','╜','╛','┐',
    // 0xC0-0xCF
    '└','┴','┬','├','─','┼','╞','╟', '╚','╔','╩','╦','╠','═','╬','╧',
    // 0xD0-0xDF
    '╨','╤','╥','╙','╘','╒','╓','╫', '╪','┘','┌','█','▄','▌','▐','▀',
    // 0xE0-0xEF
    'α','ß','Γ','π','Σ','σ','µ','τ', 'Φ','Θ','Ω','δ','∞','φ','ε','∩',
    // 0xF0-0xFF
    '≡','±','≥','≤','⌠','⌡','÷','≈', '°','∙','·','√','ⁿ','²','■','\u{00A0}',
];
