/// Two-letter country codes used as policy table keys and region hints.
pub struct RegionCode {
}

impl RegionCode {
    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    /// Great Britain as the parsing engine reports it.
    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn ua() -> &'static str {
        "UA"
    }

    /// Key the default policy table uses for the United Kingdom. Not an ISO
    /// 3166 code, so the engine never detects it; see [`RegionCode::gb`].
    pub fn uk() -> &'static str {
        "UK"
    }

    pub fn us() -> &'static str {
        "US"
    }
}
