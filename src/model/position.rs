/// Canonical `<chromosome>_<offset>` key shared by the panel and mutation sets.
pub fn position_key(chrom: &str, offset: &str) -> String {
    let mut key = String::with_capacity(chrom.len() + offset.len() + 1);
    key.push_str(chrom);
    key.push('_');
    key.push_str(offset);
    key
}

/// Splits a key at its last `_`. The suffix must be the canonical decimal
/// form of an integer (no sign prefix, no leading zeros), otherwise the key
/// can never name a panel position and `None` is returned.
pub fn split_position_key(key: &str) -> Option<(&str, i64)> {
    let (chrom, offset) = key.rsplit_once('_')?;
    let value = parse_canonical_offset(offset)?;
    Some((chrom, value))
}

pub fn parse_canonical_offset(token: &str) -> Option<i64> {
    let value = token.parse::<i64>().ok()?;
    if value.to_string() == token {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/position.rs"]
mod tests;
