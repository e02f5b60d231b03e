//! Frame identifier tables and generic key conversion.

use crate::id3::header::Version;

/// Text frames valid in both ID3v2.3 and ID3v2.4.
pub const COMMON_TAGS: &[&str] = &[
    "TALB", "TBPM", "TCOM", "TCON", "TCOP", "TDLY", "TENC", "TEXT",
    "TFLT", "TIT1", "TIT2", "TIT3", "TKEY", "TLAN", "TLEN", "TMED",
    "TOAL", "TOFN", "TOLY", "TOPE", "TOWN", "TPE1", "TPE2", "TPE3",
    "TPE4", "TPOS", "TPUB", "TRCK", "TRSN", "TRSO", "TSRC", "TSSE",
];

/// Text frames introduced by ID3v2.4.
pub const V4_TAGS: &[&str] = &[
    "TDEN", "TDOR", "TDRC", "TDRL", "TDTG", "TIPL", "TMCL", "TMOO",
    "TPRO", "TSOA", "TSOP", "TSOT", "TSST",
];

/// Text frames dropped by ID3v2.4.
pub const V3_TAGS: &[&str] = &["TDAT", "TIME", "TORY", "TRDA", "TSIZ", "TYER"];

/// Generic metadata names shared by both versions, as (frame id, generic name).
pub const ID3V2_34_KEY_CONV: &[(&str, &str)] = &[
    ("TALB", "album"),
    ("TCOM", "composer"),
    ("TCON", "genre"),
    ("TCOP", "copyright"),
    ("TENC", "encoded_by"),
    ("TIT2", "title"),
    ("TLAN", "language"),
    ("TPE1", "artist"),
    ("TPE2", "album_artist"),
    ("TPE3", "performer"),
    ("TPOS", "disc"),
    ("TPUB", "publisher"),
    ("TRCK", "track"),
    ("TSSE", "encoder"),
];

/// Generic metadata names only ID3v2.4 has a frame for.
pub const ID3V2_4_KEY_CONV: &[(&str, &str)] = &[
    ("TDRL", "date"),
    ("TDRC", "date"),
    ("TDEN", "creation_time"),
    ("TSOA", "album-sort"),
    ("TSOP", "artist-sort"),
    ("TSOT", "title-sort"),
];

/// Version-specific frame table.
pub fn version_tags(version: Version) -> &'static [&'static str] {
    match version {
        Version::V3 => V3_TAGS,
        Version::V4 => V4_TAGS,
    }
}

fn lookup_generic(table: &[(&'static str, &str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, generic)| generic.eq_ignore_ascii_case(key))
        .map(|(native, _)| *native)
}

/// Rename a generic metadata key to the frame id this version spells it as.
/// Keys without a mapping are returned unchanged.
pub fn convert_key(key: &str, version: Version) -> &str {
    if let Some(native) = lookup_generic(ID3V2_34_KEY_CONV, key) {
        return native;
    }
    if version == Version::V4 {
        if let Some(native) = lookup_generic(ID3V2_4_KEY_CONV, key) {
            return native;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_keys_convert() {
        assert_eq!(convert_key("title", Version::V3), "TIT2");
        assert_eq!(convert_key("Artist", Version::V4), "TPE1");
        assert_eq!(convert_key("ALBUM_ARTIST", Version::V3), "TPE2");
    }

    #[test]
    fn v4_only_keys() {
        assert_eq!(convert_key("date", Version::V4), "TDRL");
        assert_eq!(convert_key("date", Version::V3), "date");
        assert_eq!(convert_key("title-sort", Version::V4), "TSOT");
        assert_eq!(convert_key("title-sort", Version::V3), "title-sort");
    }

    #[test]
    fn unknown_and_native_keys_pass_through() {
        assert_eq!(convert_key("TIT2", Version::V4), "TIT2");
        assert_eq!(convert_key("MyKey", Version::V3), "MyKey");
    }

    #[test]
    fn tables_hold_text_frame_ids() {
        for id in COMMON_TAGS.iter().chain(V3_TAGS).chain(V4_TAGS) {
            assert_eq!(id.len(), 4);
            assert!(id.starts_with('T'));
        }
        assert!(!V3_TAGS.iter().any(|id| V4_TAGS.contains(id)));
    }
}
