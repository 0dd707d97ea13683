// crates/domain/src/value_objects/int_range/parse.rs
use std::str::FromStr;

use rangekit_shared_kernel::DomainError;

use super::IntRange;

/// Parses the `Display` form `[min, max]`. Brackets are optional and the
/// bounds may appear in either order.
impl FromStr for IntRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => return Err(DomainError::invalid_literal(s, "unbalanced brackets")),
        };

        let (a, b) = inner
            .split_once(',')
            .ok_or_else(|| DomainError::invalid_literal(s, "expected two bounds separated by ','"))?;

        let parse_bound = |raw: &str| {
            raw.trim()
                .parse::<i32>()
                .map_err(|e| DomainError::invalid_literal(s, format!("bound '{}': {e}", raw.trim())))
        };

        Ok(Self::new(parse_bound(a)?, parse_bound(b)?))
    }
}
